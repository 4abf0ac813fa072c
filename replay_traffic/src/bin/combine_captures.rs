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
use std::path::PathBuf;
use anyhow::Result;
use replay_common::{define_cli, check_cli, config::load_config_path, fs::write_file_atomic, log::init_tracing};
use replay_traffic::{combine_captures, event_slug, AirportTable, EventConfig, ViewportCenter};

define_cli! { ARGS [about="combine recorded datafeed files (<timestamp>.json) into a single event capture"] =
    airports: Option<PathBuf> [help="APT_BASE.csv airport file. If set only pilots within the capture range of the event airports are kept", long],
    lon: Option<f64> [help="viewport center longitude (default is centroid of event airports or mean aircraft position)", long, requires="lat"],
    lat: Option<f64> [help="viewport center latitude (default is centroid of event airports or mean aircraft position)", long, requires="lon"],
    output: Option<PathBuf> [help="output file (default is <event-slug>.json in current dir)", short, long],
    event_config: PathBuf [help="RON file with event config (name, artccs, airports, advertised start/end)"],
    captures_dir: PathBuf [help="directory with recorded datafeed files"]
}

fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let config: EventConfig = load_config_path( &ARGS.event_config)?;
    let center = match (ARGS.lon, ARGS.lat) {
        (Some(lon), Some(lat)) => Some( ViewportCenter::from_lon_lat( lon, lat)),
        _ => None
    };

    let airports = match &ARGS.airports {
        Some(path) => Some( AirportTable::load_csv( path)?),
        None => None
    };

    let capture = combine_captures( &ARGS.captures_dir, &config, airports.as_ref(), center)?;
    let output = ARGS.output.clone().unwrap_or_else( || PathBuf::from( format!("{}.json", event_slug(&config))));
    write_file_atomic( &output, serde_json::to_string( &capture)?.as_bytes())?;

    println!("{} snapshots ({} .. {}) written to {:?}", capture.captures.len(),
        capture.first_timestamp_key.as_deref().unwrap_or("-"), capture.last_timestamp_key.as_deref().unwrap_or("-"), output);
    Ok(())
}
