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
use std::fmt;
use serde::{Serialize,Deserialize};
use replay_atlas::IconLookup;
use replay_common::{is_none, datetime::display_timestamp_key};
use replay_traffic::{AircraftFeature, LabelConfig, RingConfig, label_text, ring_radius_meters};

use crate::{config::Viewport, cursor::PlaybackState};

/// everything a renderer needs to draw one aircraft
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct RenderItem {
    pub callsign: String,
    pub longitude: f64,
    pub latitude: f64,
    pub angle: f64, // counter-clockwise icon rotation in degrees
    #[serde(skip_serializing_if="is_none")]
    pub icon: Option<String>, // key into the icon mapping
    pub label: String,
    pub label_offset_px: u32, // labels go below the icon
    #[serde(skip_serializing_if="is_none")]
    pub ring_radius_m: Option<f64>,
}

/// icon rotation for a compass heading
#[inline]
pub fn heading_angle (heading: f64)->f64 {
    (360.0 - heading).max(0.0)
}

pub fn render_item (feature: &AircraftFeature, labels: &LabelConfig, rings: &RingConfig, icons: Option<&IconLookup>)->RenderItem {
    let data = &feature.data;
    let (icon, label_offset_px) = match icons {
        Some(lookup) => {
            let resolved = lookup.resolve( data.aircraft_type());
            (Some(resolved.key.to_string()), resolved.entry.width)
        }
        None => (None, 0)
    };

    RenderItem {
        callsign: data.callsign.clone(),
        longitude: data.longitude,
        latitude: data.latitude,
        angle: heading_angle( data.heading),
        icon,
        label: label_text( data, labels),
        label_offset_px,
        ring_radius_m: if rings.visible { Some( ring_radius_meters( rings)) } else { None },
    }
}

/// what we publish after each state change of the player
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct Frame {
    pub event: Option<String>,
    pub timestamp: Option<String>,
    pub index: usize,
    pub len: usize,
    pub state: PlaybackState,
    pub speed: f64,
    pub viewport: Viewport,
    pub n_aircraft: usize, // in snapshot, before filtering
    pub items: Vec<RenderItem>,
}

impl Frame {
    pub fn is_playing (&self)->bool { self.state == PlaybackState::Playing }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let time = self.timestamp.as_deref().map( display_timestamp_key).unwrap_or_else( || "-".to_string());
        write!( f, "[{}/{}] {} {:?} {}x : {} of {} aircraft",
            (self.index + 1).min(self.len), self.len, time, self.state, self.speed, self.items.len(), self.n_aircraft)
    }
}
