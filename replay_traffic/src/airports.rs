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

use std::{collections::HashMap, io, path::Path};
use geo::{Distance, Haversine, Point};
use serde::Deserialize;
use tracing::{debug,warn};

use crate::{EventConfig, PilotData, ViewportCenter};
use crate::errors::Result;
use crate::labels::NM_TO_METERS;

/// recorded pilots are kept if they are within this distance of any event airport
pub const CAPTURE_RANGE_NM: f64 = 600.0;

/// the columns we need from the FAA NASR airport base file (APT_BASE.csv)
#[derive(Debug,Deserialize)]
struct AirportRecord {
    #[serde(rename = "ARPT_ID")]
    faa_id: String,
    #[serde(rename = "ICAO_ID")]
    icao_id: String,
    #[serde(rename = "LAT_DECIMAL")]
    latitude: f64,
    #[serde(rename = "LONG_DECIMAL")]
    longitude: f64,
}

#[derive(Debug,Clone,PartialEq)]
pub struct Airport {
    pub icao_id: String,
    pub faa_id: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl Airport {
    pub fn new (icao_id: impl ToString, faa_id: impl ToString, longitude: f64, latitude: f64)->Self {
        Airport { icao_id: icao_id.to_string(), faa_id: faa_id.to_string(), longitude, latitude }
    }

    pub fn point (&self)->Point<f64> { Point::new( self.longitude, self.latitude) }

    /// great circle distance in meters
    pub fn distance_to (&self, longitude: f64, latitude: f64)->f64 {
        Haversine.distance( self.point(), Point::new( longitude, latitude))
    }
}

impl From<AirportRecord> for Airport {
    fn from (r: AirportRecord)->Self {
        Airport { icao_id: r.icao_id, faa_id: r.faa_id, longitude: r.longitude, latitude: r.latitude }
    }
}

/// airports keyed by (uppercase) ICAO id
#[derive(Debug,Clone,Default)]
pub struct AirportTable {
    airports: HashMap<String,Airport>,
}

impl AirportTable {
    /// read APT_BASE style CSV data. Records without ICAO id are skipped
    pub fn from_csv_reader (reader: impl io::Read)->Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut airports = HashMap::new();

        for res in csv_reader.deserialize() {
            let record: AirportRecord = res?;
            if !record.icao_id.is_empty() {
                airports.insert( record.icao_id.to_uppercase(), Airport::from(record));
            }
        }
        debug!("loaded {} airports", airports.len());
        Ok( AirportTable { airports } )
    }

    pub fn load_csv (path: impl AsRef<Path>)->Result<Self> {
        let file = std::fs::File::open( path.as_ref())?;
        Self::from_csv_reader( io::BufReader::new(file))
    }

    pub fn len (&self)->usize { self.airports.len() }
    pub fn is_empty (&self)->bool { self.airports.is_empty() }

    pub fn get (&self, icao_id: &str)->Option<&Airport> {
        self.airports.get( &icao_id.to_uppercase())
    }

    /// the airports of an event that we know about, in the order of the event config
    pub fn event_airports (&self, config: &EventConfig)->Vec<&Airport> {
        config.airports.iter().filter_map( |id| {
            let apt = self.get(id);
            if apt.is_none() { warn!("unknown event airport {id}") }
            apt
        }).collect()
    }
}

impl FromIterator<Airport> for AirportTable {
    fn from_iter<I: IntoIterator<Item=Airport>> (iter: I)->Self {
        AirportTable { airports: iter.into_iter().map( |a| (a.icao_id.to_uppercase(), a)).collect() }
    }
}

/// mean position of the given airports, `None` if there are none
pub fn airport_centroid (airports: &[&Airport])->Option<ViewportCenter> {
    if airports.is_empty() { return None }

    let n = airports.len() as f64;
    let lon = airports.iter().map( |a| a.longitude).sum::<f64>() / n;
    let lat = airports.iter().map( |a| a.latitude).sum::<f64>() / n;
    Some( ViewportCenter::from_lon_lat( lon, lat))
}

/// does the pilot fly to or from one of the airports, or is within `range_nm` of one of them
pub fn is_in_capture_range (pilot: &PilotData, airports: &[&Airport], range_nm: f64)->bool {
    let serves_airport = pilot.flight_plan.as_ref().is_some_and( |fp| {
        airports.iter().any( |a| a.icao_id.eq_ignore_ascii_case( &fp.departure) || a.icao_id.eq_ignore_ascii_case( &fp.arrival))
    });

    serves_airport || airports.iter().any( |a| a.distance_to( pilot.longitude, pilot.latitude) < range_nm * NM_TO_METERS)
}

pub fn select_in_capture_range (mut pilots: Vec<PilotData>, airports: &[&Airport], range_nm: f64)->Vec<PilotData> {
    pilots.retain( |p| is_in_capture_range( p, airports, range_nm));
    pilots
}
