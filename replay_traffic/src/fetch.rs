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
use reqwest::{Client, StatusCode, header::{HeaderMap,HeaderValue,ACCEPT}};
use tracing::debug;

use crate::{Capture, EventMetadata, parse_event_capture, parse_events_metadata};
use crate::errors::{Result, ReplayTrafficError};

/// single shot HTTP retrieval of event lists and captures. There are no retries - failed
/// requests are reported to the caller, which keeps whatever state it had
#[derive(Debug,Clone,Default)]
pub struct TrafficClient {
    client: Client,
}

impl TrafficClient {
    pub fn new ()->Self {
        TrafficClient { client: Client::new() }
    }

    pub fn with_client (client: Client)->Self {
        TrafficClient { client }
    }

    pub async fn get_events_metadata (&self, url: &str)->Result<Vec<EventMetadata>> {
        let data = self.get_json_bytes( url).await?;
        parse_events_metadata( &data)
    }

    pub async fn get_event_capture (&self, url: &str)->Result<Capture> {
        let data = self.get_json_bytes( url).await?;
        let capture = parse_event_capture( &data)?;
        debug!("retrieved capture '{}' with {} snapshots ({} bytes)", capture.name(), capture.len(), data.len());
        Ok(capture)
    }

    async fn get_json_bytes (&self, url: &str)->Result<Vec<u8>> {
        let mut headers = HeaderMap::new();
        headers.insert( ACCEPT, HeaderValue::from_static("application/json"));

        let response = self.client.get( url).headers( headers).send().await?;
        match response.status() {
            StatusCode::OK => Ok( response.bytes().await?.to_vec() ),
            other => Err( ReplayTrafficError::HttpStatusError( format!("{url} : {other}")))
        }
    }
}

/// identifies one capture request. Only the response for the most recently issued token
/// may be committed, responses for superseded tokens are stale
#[derive(Debug,Clone,Copy,PartialEq,Eq,PartialOrd,Ord,Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn generation (&self)->u64 { self.0 }
}

/// issues monotonically increasing request tokens. Owned by the single task that commits responses
#[derive(Debug,Clone,Default)]
pub struct RequestTracker {
    current: u64,
}

impl RequestTracker {
    pub fn new ()->Self { RequestTracker::default() }

    /// start a new request, which supersedes all previous ones
    pub fn next (&mut self)->RequestToken {
        self.current += 1;
        RequestToken( self.current)
    }

    pub fn is_current (&self, token: RequestToken)->bool {
        self.current == token.0
    }

    /// make all outstanding requests stale without issuing a new one
    pub fn invalidate (&mut self) {
        self.current += 1;
    }
}
