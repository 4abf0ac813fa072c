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

/// traffic data for the replay: the event capture model (GeoJSON snapshots of VATSIM pilot records keyed
/// by timestamp), snapshot filtering by route and speed, aircraft labels, HTTP retrieval of event lists and
/// captures, and combining recorded datafeed files (restricted to the capture range around the event airports)
/// into a capture

pub mod errors;
pub use errors::{Result, ReplayTrafficError};

mod capture;
pub use capture::*;

pub mod filter;
pub use filter::{FilterConfig, FlightPlanPolicy, RouteFilter, RouteFilters, filter_snapshot, filter_features};

pub mod labels;
pub use labels::{LabelConfig, RingConfig, label_text, ring_radius_meters, clamp_ring_distance_nm};

pub mod fetch;
pub use fetch::{TrafficClient, RequestToken, RequestTracker};

pub mod airports;
pub use airports::{Airport, AirportTable, CAPTURE_RANGE_NM, airport_centroid, select_in_capture_range};

pub mod combine;
pub use combine::{combine_captures, event_slug};
