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
use std::{fmt, str::FromStr};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize,Deserialize};

use crate::{AircraftFeature, FlightPlan, PilotData, Snapshot};
use crate::errors::{Result, ReplayTrafficError};

pub const WILDCARD: &str = "*";

/// aircraft below this groundspeed (kts) are considered to be on the ground
pub const DEFAULT_GROUNDSPEED_THRESHOLD: f64 = 30.0;

lazy_static! {
    static ref AIRPORT_RE: Regex = Regex::new(r"^(?:[A-Z0-9]{4}|\*)$").unwrap();
}

/// departure/arrival pair, each field is either a 4 character ICAO code or the `*` wildcard
#[derive(Debug,Clone,PartialEq,Eq,Hash,Serialize,Deserialize)]
pub struct RouteFilter {
    pub departure: String,
    pub arrival: String,
}

impl RouteFilter {
    /// normalize (trim, uppercase) and validate user input
    pub fn parse (departure: &str, arrival: &str)->Result<Self> {
        let departure = normalize_airport( departure)?;
        let arrival = normalize_airport( arrival)?;
        Ok( RouteFilter{ departure, arrival } )
    }

    pub fn any ()->Self {
        RouteFilter { departure: WILDCARD.to_string(), arrival: WILDCARD.to_string() }
    }

    pub fn matches (&self, fp: &FlightPlan)->bool {
        field_matches( &self.arrival, &fp.arrival) && field_matches( &self.departure, &fp.departure)
    }
}

fn normalize_airport (s: &str)->Result<String> {
    let s = s.trim().to_uppercase();
    if AIRPORT_RE.is_match( &s) {
        Ok(s)
    } else {
        Err( ReplayTrafficError::InvalidRouteFilter( format!("'{s}' is neither a 4 letter ICAO code nor '{WILDCARD}'")))
    }
}

#[inline]
fn field_matches (filter_value: &str, fp_value: &str)->bool {
    filter_value == WILDCARD || filter_value.eq_ignore_ascii_case( fp_value.trim())
}

/// parses "DEP-ARR", e.g. "KSFO-*"
impl FromStr for RouteFilter {
    type Err = ReplayTrafficError;

    fn from_str (s: &str)->Result<Self> {
        match s.split_once('-') {
            Some((dep,arr)) => RouteFilter::parse( dep, arr),
            None => Err( ReplayTrafficError::InvalidRouteFilter( format!("'{s}' is not of the form DEP-ARR")))
        }
    }
}

impl fmt::Display for RouteFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!( f, "{}-{}", self.departure, self.arrival)
    }
}

/// the active route filters, in the order they were added and without duplicates
#[derive(Debug,Clone,Default,PartialEq,Serialize,Deserialize)]
pub struct RouteFilters(Vec<RouteFilter>);

impl RouteFilters {
    pub fn new ()->Self { RouteFilters(Vec::new()) }

    /// returns false if the filter was already present
    pub fn add (&mut self, filter: RouteFilter)->bool {
        if self.0.contains( &filter) {
            false
        } else {
            self.0.push( filter);
            true
        }
    }

    /// returns false if there was no such filter
    pub fn remove (&mut self, filter: &RouteFilter)->bool {
        let len = self.0.len();
        self.0.retain( |f| f != filter);
        self.0.len() != len
    }

    pub fn clear (&mut self) { self.0.clear() }

    pub fn len (&self)->usize { self.0.len() }
    pub fn is_empty (&self)->bool { self.0.is_empty() }
    pub fn iter (&self)->impl Iterator<Item=&RouteFilter> { self.0.iter() }

    /// OR over all filters. Note this is false for an empty set - callers decide what "no filters" means
    pub fn any_match (&self, fp: &FlightPlan)->bool {
        self.0.iter().any( |f| f.matches(fp))
    }
}

impl FromIterator<RouteFilter> for RouteFilters {
    fn from_iter<I: IntoIterator<Item=RouteFilter>> (iter: I)->Self {
        let mut filters = RouteFilters::new();
        for f in iter { filters.add(f); }
        filters
    }
}

/// when do we require aircraft to have a flight plan to be displayed
#[derive(Debug,Clone,Copy,Default,PartialEq,Eq,Serialize,Deserialize)]
pub enum FlightPlanPolicy {
    /// aircraft without flight plan are never shown
    #[default]
    Always,
    /// aircraft without flight plan are only hidden while route filters are active
    WhenFiltered,
}

#[derive(Debug,Clone,PartialEq,Serialize,Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub route_filters: RouteFilters,
    pub hide_slow_aircraft: bool,
    pub groundspeed_threshold: f64,
    pub flight_plan_policy: FlightPlanPolicy,
}

impl Default for FilterConfig {
    fn default ()->Self {
        FilterConfig {
            route_filters: RouteFilters::new(),
            hide_slow_aircraft: false,
            groundspeed_threshold: DEFAULT_GROUNDSPEED_THRESHOLD,
            flight_plan_policy: FlightPlanPolicy::default(),
        }
    }
}

impl FilterConfig {
    /// the per aircraft predicate
    pub fn accepts (&self, data: &PilotData)->bool {
        if self.hide_slow_aircraft {
            if let Some(gs) = data.groundspeed { // unknown speed is not considered to be slow
                if gs < self.groundspeed_threshold { return false }
            }
        }

        match &data.flight_plan {
            Some(fp) => self.route_filters.is_empty() || self.route_filters.any_match( fp),
            None => self.flight_plan_policy == FlightPlanPolicy::WhenFiltered && self.route_filters.is_empty()
        }
    }
}

/// the subset of snapshot features to render, in snapshot order
pub fn filter_snapshot<'a> (snapshot: &'a Snapshot, config: &FilterConfig)->Vec<&'a AircraftFeature> {
    filter_features( snapshot.features.iter(), config)
}

pub fn filter_features<'a,I> (features: I, config: &FilterConfig)->Vec<&'a AircraftFeature> where I: IntoIterator<Item=&'a AircraftFeature> {
    features.into_iter().filter( |f| config.accepts( &f.data)).collect()
}
