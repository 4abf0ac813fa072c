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
use serde::{Serialize,Deserialize};
use crate::PilotData;

pub const NM_TO_METERS: f64 = 1852.0;
pub const MAX_RING_DISTANCE_NM: f64 = 50.0;
pub const DEFAULT_RING_DISTANCE_NM: f64 = 3.0;

/// which lines to show in aircraft labels
#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub callsign: bool,
    pub speed: bool,
    pub altitude: bool,
    pub departure: bool,
    pub destination: bool,
}

impl Default for LabelConfig {
    fn default ()->Self {
        LabelConfig { callsign: true, speed: false, altitude: false, departure: false, destination: false }
    }
}

impl LabelConfig {
    pub fn is_empty (&self)->bool {
        !(self.callsign || self.speed || self.altitude || self.departure || self.destination)
    }
}

/// multi-line label for one aircraft. Lines for data the aircraft doesn't have are left out
pub fn label_text (data: &PilotData, labels: &LabelConfig)->String {
    let mut lines: Vec<String> = Vec::with_capacity(5);

    if labels.callsign {
        lines.push( data.callsign.clone());
    }
    if labels.speed {
        if let Some(gs) = data.groundspeed {
            lines.push( format!("{gs:.0}kts"));
        }
    }
    if labels.altitude {
        lines.push( format!("{:.0}ft", data.altitude));
    }
    if let Some(fp) = &data.flight_plan {
        if labels.departure { lines.push( fp.departure.clone()) }
        if labels.destination { lines.push( fp.arrival.clone()) }
    }

    lines.join("\n")
}

/// range rings drawn around each displayed aircraft
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct RingConfig {
    pub visible: bool,
    pub distance_nm: f64,
}

impl Default for RingConfig {
    fn default ()->Self {
        RingConfig { visible: false, distance_nm: DEFAULT_RING_DISTANCE_NM }
    }
}

impl RingConfig {
    /// set the ring distance, clamped to [0,50]nm. Non-finite values are ignored
    pub fn set_distance_nm (&mut self, nm: f64) {
        if nm.is_finite() {
            self.distance_nm = nm.clamp( 0.0, MAX_RING_DISTANCE_NM);
        }
    }

    /// the same config with its distance forced into the valid range (e.g. after deserialization)
    pub fn normalized (self)->Self {
        RingConfig { distance_nm: clamp_ring_distance_nm( self.distance_nm), ..self }
    }

    pub fn radius_meters (&self)->f64 {
        ring_radius_meters( self)
    }
}

/// [0,50]nm, non-finite distances fall back to the default
pub fn clamp_ring_distance_nm (nm: f64)->f64 {
    if nm.is_finite() { nm.clamp( 0.0, MAX_RING_DISTANCE_NM) } else { DEFAULT_RING_DISTANCE_NM }
}

pub fn ring_radius_meters (cfg: &RingConfig)->f64 {
    clamp_ring_distance_nm( cfg.distance_nm) * NM_TO_METERS
}
