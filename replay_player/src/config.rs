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
use serde::{Serialize,Deserialize};
use replay_traffic::{FlightPlanPolicy, LabelConfig, RingConfig, ViewportCenter, filter::DEFAULT_GROUNDSPEED_THRESHOLD};
use crate::cursor::DEFAULT_SPEED;

pub const DEFAULT_ZOOM: f64 = 4.0;
pub const DEFAULT_CAPTURE_ZOOM: f64 = 7.0;

/// map view. The default shows the contiguous US
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub longitude: f64,
    pub latitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub bearing: f64,
}

impl Default for Viewport {
    fn default ()->Self {
        Viewport { longitude: -98.583333, latitude: 39.833333, zoom: DEFAULT_ZOOM, pitch: 0.0, bearing: 0.0 }
    }
}

impl Viewport {
    /// re-center on a capture, keeping pitch and bearing
    pub fn centered_on (&self, center: &ViewportCenter, zoom: f64)->Self {
        Viewport { longitude: center.longitude(), latitude: center.latitude(), zoom, ..*self }
    }
}

/// the configuration of the replay front end, normally loaded from `replay.ron`
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    pub events_metadata_url: Option<String>,
    pub icon_mapping: Option<PathBuf>, // the iconMapping.json produced by mk_atlas
    pub default_icon: String, // used for aircraft without or with unknown type
    pub default_speed: f64,
    pub speeds: Vec<f64>, // the speed choices offered to users
    pub groundspeed_threshold: f64,
    pub flight_plan_policy: FlightPlanPolicy,
    pub labels: LabelConfig,
    pub rings: RingConfig,
    pub viewport: Viewport,
    pub capture_zoom: f64,
}

impl Default for ReplayConfig {
    fn default ()->Self {
        ReplayConfig {
            events_metadata_url: None,
            icon_mapping: None,
            default_icon: "a320".to_string(),
            default_speed: DEFAULT_SPEED,
            speeds: vec![1.0, 2.0, 4.0, 8.0, 16.0],
            groundspeed_threshold: DEFAULT_GROUNDSPEED_THRESHOLD,
            flight_plan_policy: FlightPlanPolicy::default(),
            labels: LabelConfig::default(),
            rings: RingConfig::default(),
            viewport: Viewport::default(),
            capture_zoom: DEFAULT_CAPTURE_ZOOM,
        }
    }
}
