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

use std::collections::BTreeMap;
use chrono::{TimeZone, Utc};
use replay_traffic::{AircraftFeature, Capture, EventConfig, FlightPlan, PilotData, Snapshot, ViewportCenter};

pub fn pilot (callsign: &str, aircraft: Option<&str>, groundspeed: f64, heading: f64)->AircraftFeature {
    let flight_plan = aircraft.map( |t| FlightPlan {
        aircraft_short: t.to_string(),
        departure: "KSFO".to_string(),
        arrival: "KLAX".to_string(),
        ..FlightPlan::default()
    });
    AircraftFeature::new( PilotData {
        cid: None,
        name: String::new(),
        callsign: callsign.to_string(),
        latitude: 37.5,
        longitude: -122.0,
        altitude: 24000.0,
        groundspeed: Some(groundspeed),
        transponder: String::new(),
        heading,
        flight_plan,
        logon_time: String::new(),
        last_updated: String::new(),
    })
}

/// a capture with `n` snapshots, one second apart. Snapshot i has i+1 aircraft
pub fn capture (name: &str, n: usize)->Capture {
    let config = EventConfig {
        name: name.to_string(),
        artccs: vec!["ZOA".to_string()],
        airports: vec!["KSFO".to_string()],
        advertised_start_time: Utc.with_ymd_and_hms( 2025, 3, 1, 18, 0, 0).unwrap(),
        advertised_end_time: Utc.with_ymd_and_hms( 2025, 3, 1, 22, 0, 0).unwrap(),
    };

    let mut snapshots = BTreeMap::new();
    for i in 0..n {
        let features = (0..=i).map( |j| pilot( &format!("AC{j}"), Some("B738"), 250.0, 90.0)).collect();
        snapshots.insert( format!("20250301180{:03}", i), Snapshot{ features });
    }
    Capture::new( config, ViewportCenter::from_lon_lat( -122.3, 37.7), snapshots)
}
