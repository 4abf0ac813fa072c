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
use std::{collections::BTreeMap, fmt, path::Path};
use chrono::{DateTime,Utc};
use serde::{Serialize,Deserialize};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value, feature::Id};
use tracing::warn;
use replay_common::{is_none, fs::file_contents_as_bytes};

use crate::errors::{Result, ReplayTrafficError, parse_error};

/// flight plan as filed by the pilot. Fields the feed leaves out are empty
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct FlightPlan {
    pub flight_rules: String,
    pub aircraft: String,
    pub aircraft_faa: String,
    pub aircraft_short: String,
    pub departure: String,
    pub arrival: String,
    pub alternate: String,
    pub altitude: String,
    pub route: String,
    pub revision_id: i64,
}

/// the per-aircraft record stored in `properties.data` of each capture feature
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct PilotData {
    #[serde(default, skip_serializing_if="is_none")]
    pub cid: Option<u64>,
    #[serde(default)]
    pub name: String,
    pub callsign: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub altitude: f64,   // ft
    #[serde(default)]
    pub groundspeed: Option<f64>, // kts
    #[serde(default)]
    pub transponder: String,
    #[serde(default)]
    pub heading: f64,    // deg
    #[serde(default, skip_serializing_if="is_none")]
    pub flight_plan: Option<FlightPlan>,
    #[serde(default)]
    pub logon_time: String,
    #[serde(default)]
    pub last_updated: String,
}

impl PilotData {
    pub fn aircraft_type (&self)->Option<&str> {
        self.flight_plan.as_ref().map( |fp| fp.aircraft_short.as_str()).filter( |t| !t.is_empty())
    }
}

impl fmt::Display for PilotData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{} ({:.4},{:.4}) alt: {:.0}ft hdg: {:.0}", self.callsign, self.latitude, self.longitude, self.altitude, self.heading)?;
        if let Some(gs) = self.groundspeed { write!( f, " spd: {gs:.0}kts")?; }
        if let Some(fp) = &self.flight_plan { write!( f, " {}->{} {}", fp.departure, fp.arrival, fp.aircraft_short)?; }
        Ok(())
    }
}

/// one aircraft point feature of a snapshot
#[derive(Debug,Clone,PartialEq)]
pub struct AircraftFeature {
    pub id: Option<u64>,
    pub data: PilotData,
}

impl AircraftFeature {
    pub fn new (data: PilotData)->Self {
        AircraftFeature { id: data.cid, data }
    }

    pub fn to_feature (&self)->Result<Feature> {
        let geometry = Some( Geometry::new( Value::Point( vec![self.data.longitude, self.data.latitude])));
        let id = self.id.map( |id| Id::Number(id.into()));
        let mut properties = JsonObject::new();
        properties.insert( "data".to_string(), serde_json::to_value( &self.data)?);

        Ok( Feature { bbox: None, geometry, id, properties: Some(properties), foreign_members: None } )
    }
}

impl TryFrom<&Feature> for AircraftFeature {
    type Error = ReplayTrafficError;

    fn try_from (feature: &Feature)->Result<Self> {
        let data = feature.properties.as_ref()
            .and_then( |p| p.get("data"))
            .ok_or_else( || parse_error!("feature {:?} has no properties.data", feature.id))?;
        let data: PilotData = serde_json::from_value( data.clone())?;

        let id = match &feature.id {
            Some(Id::Number(n)) => n.as_u64(),
            _ => data.cid
        };
        Ok( AircraftFeature{ id, data } )
    }
}

/// all aircraft positions for one timestamp
#[derive(Debug,Clone,Default,PartialEq)]
pub struct Snapshot {
    pub features: Vec<AircraftFeature>,
}

impl Snapshot {
    /// features we can't interpret are skipped (with a warning) instead of failing the whole snapshot
    pub fn from_feature_collection (fc: &FeatureCollection)->Self {
        let mut features = Vec::with_capacity( fc.features.len());
        for f in &fc.features {
            match AircraftFeature::try_from(f) {
                Ok(af) => features.push(af),
                Err(e) => warn!("skipping feature: {e}")
            }
        }
        Snapshot{ features }
    }

    pub fn to_feature_collection (&self)->Result<FeatureCollection> {
        let features = self.features.iter().map( |f| f.to_feature()).collect::<Result<Vec<Feature>>>()?;
        Ok( FeatureCollection{ bbox: None, features, foreign_members: None } )
    }

    pub fn len (&self)->usize { self.features.len() }
    pub fn is_empty (&self)->bool { self.features.is_empty() }
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct EventConfig {
    pub name: String,
    pub artccs: Vec<String>,
    pub airports: Vec<String>,
    pub advertised_start_time: DateTime<Utc>,
    pub advertised_end_time: DateTime<Utc>,
}

/// entry of the published event list
#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
pub struct EventMetadata {
    pub event: EventConfig,
    pub url: String,
}

/// lon/lat center of a capture (serialized as x/y)
#[derive(Debug,Clone,Copy,Default,PartialEq,Serialize,Deserialize)]
pub struct ViewportCenter {
    pub x: f64,
    pub y: f64,
}

impl ViewportCenter {
    pub fn from_lon_lat (lon: f64, lat: f64)->Self { ViewportCenter{ x: lon, y: lat } }
    pub fn longitude (&self)->f64 { self.x }
    pub fn latitude (&self)->f64 { self.y }
}

/// the wire format of a combined event capture
#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct EventCapture {
    pub config: EventConfig,
    #[serde(default, skip_serializing_if="is_none")]
    pub first_timestamp_key: Option<String>,
    #[serde(default, skip_serializing_if="is_none")]
    pub last_timestamp_key: Option<String>,
    pub captures: BTreeMap<String,FeatureCollection>,
    #[serde(default)]
    pub captures_length_bytes: usize,
    pub viewport_center: ViewportCenter,
}

/// the in-memory replay data for one event - snapshots in chronological order
#[derive(Debug,Clone)]
pub struct Capture {
    pub config: EventConfig,
    pub viewport_center: ViewportCenter,
    pub captures_length_bytes: usize,
    snapshots: BTreeMap<String,Snapshot>,
    timestamps: Vec<String>,
}

impl Capture {
    pub fn new (config: EventConfig, viewport_center: ViewportCenter, snapshots: BTreeMap<String,Snapshot>)->Self {
        // fixed width timestamp keys, i.e. BTreeMap order is chronological
        let timestamps: Vec<String> = snapshots.keys().cloned().collect();
        Capture { config, viewport_center, captures_length_bytes: 0, snapshots, timestamps }
    }

    pub fn name (&self)->&str { self.config.name.as_str() }

    pub fn timestamps (&self)->&[String] { self.timestamps.as_slice() }
    pub fn len (&self)->usize { self.timestamps.len() }
    pub fn is_empty (&self)->bool { self.timestamps.is_empty() }

    pub fn snapshot (&self, key: &str)->Option<&Snapshot> { self.snapshots.get(key) }

    pub fn snapshot_at (&self, idx: usize)->Option<(&str,&Snapshot)> {
        self.timestamps.get(idx).and_then( |k| self.snapshots.get(k).map( |s| (k.as_str(), s)))
    }

    pub fn to_event_capture (&self)->Result<EventCapture> {
        let mut captures = BTreeMap::new();
        for (k,s) in &self.snapshots {
            captures.insert( k.clone(), s.to_feature_collection()?);
        }
        Ok( EventCapture {
            config: self.config.clone(),
            first_timestamp_key: self.timestamps.first().cloned(),
            last_timestamp_key: self.timestamps.last().cloned(),
            captures,
            captures_length_bytes: self.captures_length_bytes,
            viewport_center: self.viewport_center,
        })
    }
}

impl From<EventCapture> for Capture {
    fn from (ec: EventCapture)->Self {
        let snapshots = ec.captures.iter().map( |(k,fc)| (k.clone(), Snapshot::from_feature_collection(fc))).collect();
        let mut capture = Capture::new( ec.config, ec.viewport_center, snapshots);
        capture.captures_length_bytes = ec.captures_length_bytes;
        capture
    }
}

pub fn parse_event_capture (data: &[u8])->Result<Capture> {
    let ec: EventCapture = serde_json::from_slice( data)?;
    Ok( Capture::from(ec) )
}

pub fn load_capture_file (path: impl AsRef<Path>)->Result<Capture> {
    let data = file_contents_as_bytes( path)?;
    parse_event_capture( &data)
}

pub fn parse_events_metadata (data: &[u8])->Result<Vec<EventMetadata>> {
    Ok( serde_json::from_slice( data)? )
}

pub fn load_events_metadata_file (path: impl AsRef<Path>)->Result<Vec<EventMetadata>> {
    let data = file_contents_as_bytes( path)?;
    parse_events_metadata( &data)
}
