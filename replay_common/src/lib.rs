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
#![allow(unused)]

/// shared infrastructure of the traffic replay crates: declarative macros, filesystem and
/// timestamp helpers, RON config lookup and tracing initialization

pub mod macros;
pub mod fs;
pub mod datetime;
pub mod config;
pub mod log;

// a global fn that can be used with serde(skip_serializing_if="replay_common::is_none")
#[inline] pub fn is_none<T> (opt: &Option<T>)->bool { opt.is_none() }

/// clamp a signed index into `[0,len-1]` - returns 0 for empty sequences
#[inline]
pub fn clamp_index (idx: i64, len: usize)->usize {
    if len == 0 || idx <= 0 { 0 } else { (idx as usize).min( len-1) }
}
