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
use tracing::{debug,info};
use replay_atlas::IconLookup;
use replay_traffic::{
    Capture, EventMetadata, FilterConfig, LabelConfig, RequestToken, RequestTracker, RingConfig, Snapshot,
    filter_snapshot
};

use crate::{
    config::{ReplayConfig, Viewport},
    cursor::{Playback, TimerCommand},
    frame::{Frame, render_item},
    errors::{Result, ReplayPlayerError},
};

/// the complete (owned) state of the replay front end
#[derive(Debug)]
pub struct AppState {
    pub viewport: Viewport,
    pub capture_zoom: f64,
    pub speeds: Vec<f64>, // the speed choices offered to the user, any valid speed if empty
    pub events: Vec<EventMetadata>,
    pub selected_event: Option<String>, // url of the last selected event
    pub capture: Option<Capture>,
    pub playback: Playback,
    pub filter: FilterConfig,
    pub labels: LabelConfig,
    pub rings: RingConfig,
    pub requests: RequestTracker,
    pub icons: Option<IconLookup>,
}

impl AppState {
    pub fn new (config: &ReplayConfig, icons: Option<IconLookup>)->Result<Self> {
        let mut filter = FilterConfig::default();
        filter.groundspeed_threshold = config.groundspeed_threshold;
        filter.flight_plan_policy = config.flight_plan_policy;

        Ok( AppState {
            viewport: config.viewport,
            capture_zoom: config.capture_zoom,
            speeds: config.speeds.clone(),
            events: Vec::new(),
            selected_event: None,
            capture: None,
            playback: Playback::with_speed( 0, config.default_speed)?,
            filter,
            labels: config.labels,
            rings: config.rings.normalized(),
            requests: RequestTracker::new(),
            icons,
        })
    }

    /// change the playback speed to one of the offered choices
    pub fn set_speed (&mut self, speed: f64)->Result<TimerCommand> {
        if !self.speeds.is_empty() && !self.speeds.contains( &speed) {
            return Err( ReplayPlayerError::IllegalArgument( format!("playback speed {speed} is not one of {:?}", self.speeds)))
        }
        self.playback.set_speed( speed)
    }

    /// start loading the capture of an event. Only the returned token can commit the result
    pub fn select_event (&mut self, url: &str)->RequestToken {
        self.selected_event = Some(url.to_string());
        self.requests.next()
    }

    /// commit a fetched capture if it still belongs to the current selection, otherwise it is dropped
    pub fn commit_capture (&mut self, token: RequestToken, capture: Capture)->Option<TimerCommand> {
        if self.requests.is_current( token) {
            Some( self.set_capture( capture))
        } else {
            debug!("discarding stale capture '{}' (request {})", capture.name(), token.generation());
            None
        }
    }

    /// replace the current capture. This supersedes any outstanding fetch
    pub fn set_capture (&mut self, capture: Capture)->TimerCommand {
        info!("loaded capture '{}' with {} snapshots", capture.name(), capture.len());
        self.requests.invalidate();
        self.viewport = self.viewport.centered_on( &capture.viewport_center, self.capture_zoom);
        let cmd = self.playback.reset( capture.len());
        self.capture = Some(capture);
        cmd
    }

    pub fn current_snapshot (&self)->Option<(&str,&Snapshot)> {
        self.capture.as_ref().and_then( |c| c.snapshot_at( self.playback.index()))
    }

    pub fn frame (&self)->Frame {
        let (timestamp, n_aircraft, items) = match self.current_snapshot() {
            Some((key,snapshot)) => {
                let items = filter_snapshot( snapshot, &self.filter).into_iter()
                    .map( |f| render_item( f, &self.labels, &self.rings, self.icons.as_ref()))
                    .collect();
                (Some(key.to_string()), snapshot.len(), items)
            }
            None => (None, 0, Vec::new())
        };

        Frame {
            event: self.capture.as_ref().map( |c| c.name().to_string()),
            timestamp,
            index: self.playback.index(),
            len: self.playback.len(),
            state: self.playback.state(),
            speed: self.playback.speed(),
            viewport: self.viewport,
            n_aircraft,
            items,
        }
    }
}
