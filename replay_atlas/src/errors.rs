/*
 * Copyright © 2025, United States Government, as represented by the Administrator of
 * the National Aeronautics and Space Administration. All rights reserved.
 *
 * The “ODIN” software is licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License. You may obtain a copy
 * of the License at http://www.apache.org/licenses/LICENSE-2.0.
 *
 * Unless required by applicable law or agreed to in writing, software distributed under
 * the License is distributed on an "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND,
 * either express or implied. See the License for the specific language governing permissions
 * and limitations under the License.
 */
use replay_common::define_error;

pub type Result<T> = std::result::Result<T, ReplayAtlasError>;

define_error!{ pub ReplayAtlasError =
    ImageError(#[from] image::ImageError) : "Image error {0}",
    IOError(#[from] std::io::Error) : "IO error: {0}",
    SerdeError(#[from] serde_json::Error) : "serialization/deserialization error: {0}",
    EmptyIconSet(String) : "no icons found: {0}",
    DuplicateKey(String) : "duplicate icon key: {0}",
    InvalidDimensions(String) : "invalid dimension error: {0}",
    NotFoundError(String) : "not found: {0}",
    IllegalArgument(String) : "illegal argument: {0}"
}
