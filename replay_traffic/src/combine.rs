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
use std::{collections::BTreeMap, path::Path};
use chrono::Datelike;
use geojson::FeatureCollection;
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info,debug,warn};
use replay_common::fs::{file_contents_as_bytes, filestem, matching_files_in_dir};

use crate::{AircraftFeature, EventCapture, EventConfig, PilotData, Snapshot, ViewportCenter};
use crate::airports::{AirportTable, CAPTURE_RANGE_NM, airport_centroid, select_in_capture_range};
use crate::errors::{Result, ReplayTrafficError, parse_error};

lazy_static! {
    // recorder output files are named by the datafeed update time
    static ref CAPTURE_FILE_RE: Regex = Regex::new(r"^\d{14}\.json$").unwrap();
}

/// turn a directory of recorded datafeed files (each a JSON array of pilot records) into a single
/// event capture.
///
/// If an airport table is given, only pilots flying to/from an event airport or within [`CAPTURE_RANGE_NM`]
/// of one are kept. The viewport center is `center` if set, otherwise the centroid of the known event
/// airports, otherwise the mean position of all kept aircraft
pub fn combine_captures (dir: impl AsRef<Path>, config: &EventConfig, airports: Option<&AirportTable>, center: Option<ViewportCenter>)->Result<EventCapture> {
    let dir = dir.as_ref();
    let files = matching_files_in_dir( &dir, &CAPTURE_FILE_RE)?;
    if files.is_empty() {
        return Err( ReplayTrafficError::EmptyCapture( format!("no capture files in {dir:?}")))
    }

    let event_airports = airports.map( |t| t.event_airports( config)).unwrap_or_default();
    if airports.is_some() && event_airports.is_empty() {
        warn!("none of the event airports {:?} is known, keeping all pilots", config.airports);
    }

    let mut captures: BTreeMap<String,FeatureCollection> = BTreeMap::new();
    let mut sum_lon = 0.0;
    let mut sum_lat = 0.0;
    let mut n_pos: usize = 0;

    for path in &files {
        let key = filestem( path).ok_or_else(|| parse_error!("invalid capture filename {path:?}"))?;
        let mut pilots: Vec<PilotData> = serde_json::from_slice( &file_contents_as_bytes( path)?)?;
        let n_recorded = pilots.len();
        if !event_airports.is_empty() {
            pilots = select_in_capture_range( pilots, &event_airports, CAPTURE_RANGE_NM);
        }
        debug!("{key} : {} of {} aircraft", pilots.len(), n_recorded);

        for p in &pilots {
            sum_lon += p.longitude;
            sum_lat += p.latitude;
            n_pos += 1;
        }

        let snapshot = Snapshot { features: pilots.into_iter().map( AircraftFeature::new).collect() };
        captures.insert( key.to_string(), snapshot.to_feature_collection()?);
    }

    let viewport_center = match center.or_else( || airport_centroid( &event_airports)) {
        Some(c) => c,
        None if n_pos > 0 => ViewportCenter::from_lon_lat( sum_lon / n_pos as f64, sum_lat / n_pos as f64),
        None => ViewportCenter::default()
    };
    let captures_length_bytes = serde_json::to_string( &captures)?.len();

    info!("combined {} captures for event '{}'", captures.len(), config.name);
    Ok( EventCapture {
        config: config.clone(),
        first_timestamp_key: captures.keys().next().cloned(),
        last_timestamp_key: captures.keys().next_back().cloned(),
        captures,
        captures_length_bytes,
        viewport_center,
    })
}

/// "YYYY-MM-DD-<name>" with a transliterated, lowercase, dash separated name, e.g. "2025-03-01-northeast-corridor-fly-in"
pub fn event_slug (config: &EventConfig)->String {
    let start = &config.advertised_start_time;
    format!("{}-{:02}-{:02}-{}", start.year(), start.month(), start.day(), slug::slugify( &config.name))
}
