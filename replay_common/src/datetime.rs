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
use std::time::Duration;
use chrono::{DateTime, NaiveDateTime, Utc};

/// captures are keyed by fixed width UTC timestamps so that lexical order is chronological order
pub const TIMESTAMP_KEY_FORMAT: &str = "%Y%m%d%H%M%S";
pub const TIMESTAMP_KEY_LEN: usize = 14;

pub fn is_timestamp_key (key: &str)->bool {
    key.len() == TIMESTAMP_KEY_LEN && key.bytes().all(|b| b.is_ascii_digit())
}

pub fn parse_timestamp_key (key: &str)->Option<DateTime<Utc>> {
    if is_timestamp_key(key) {
        NaiveDateTime::parse_from_str( key, TIMESTAMP_KEY_FORMAT).ok().map( |dt| dt.and_utc())
    } else {
        None
    }
}

pub fn to_timestamp_key (date: &DateTime<Utc>)->String {
    date.format(TIMESTAMP_KEY_FORMAT).to_string()
}

/// human readable time for a timestamp key. Keys we can't parse are returned verbatim
pub fn display_timestamp_key (key: &str)->String {
    match parse_timestamp_key(key) {
        Some(date) => date.format("%Y-%m-%d %H:%M:%SZ").to_string(),
        None => key.to_string()
    }
}

/// the timer period for a given playback speed multiplier, with 1x being one snapshot per second
pub fn playback_period (speed: f64)->Option<Duration> {
    if speed.is_finite() && speed > 0.0 {
        Some( Duration::from_secs_f64( 1.0 / speed))
    } else {
        None
    }
}
