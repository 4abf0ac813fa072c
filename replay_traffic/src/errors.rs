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

pub type Result<T> = std::result::Result<T,ReplayTrafficError>;

define_error!{ pub ReplayTrafficError =
    IOError( #[from] std::io::Error) : "IO error {0}",
    SerdeError( #[from] serde_json::Error) : "JSON error {0}",
    CsvError( #[from] csv::Error) : "CSV error {0}",
    HttpError( #[from] reqwest::Error) : "http error {0}",
    ConfigError( #[from] replay_common::config::ConfigError) : "config error {0}",
    HttpStatusError(String) : "http request failed: {0}",
    ParseError(String) : "parse error {0}",
    InvalidRouteFilter(String) : "invalid route filter: {0}",
    EmptyCapture(String) : "empty capture: {0}"
}

macro_rules! parse_error {
    ($fmt:literal $(, $arg:expr )* ) => {
        $crate::errors::ReplayTrafficError::ParseError( format!( $fmt $(, $arg)* ))
    };
}
pub (crate) use parse_error;
