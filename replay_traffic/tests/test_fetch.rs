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

use std::net::SocketAddr;
use tokio::{io::{AsyncReadExt, AsyncWriteExt}, net::TcpListener};
use replay_traffic::*;

// run with "cargo test --test test_fetch -- --nocapture"

const EVENTS: &str = r#"[
  { "event": { "name": "Test Event", "artccs": [], "airports": ["KSFO"],
               "advertised_start_time": "2025-03-01T18:00:00Z", "advertised_end_time": "2025-03-01T22:00:00Z" },
    "url": "/capture.json" }
]"#;

const CAPTURE: &str = r#"{
  "config": { "name": "Test Event", "artccs": [], "airports": ["KSFO"],
              "advertised_start_time": "2025-03-01T18:00:00Z", "advertised_end_time": "2025-03-01T22:00:00Z" },
  "captures": {
    "20250301180000": { "type": "FeatureCollection", "features": [
      { "type": "Feature", "id": 1, "geometry": { "type": "Point", "coordinates": [-122.4, 37.6] },
        "properties": { "data": { "cid": 1, "callsign": "UAL1", "latitude": 37.6, "longitude": -122.4, "groundspeed": 300 } } }
    ]}
  },
  "captures_length_bytes": 0,
  "viewport_center": { "x": -122.4, "y": 37.6 }
}"#;

/// minimal one-request-per-connection HTTP server that serves our two documents
async fn serve ()->SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn( async move {
        loop {
            let Ok((mut socket,_)) = listener.accept().await else { break };
            tokio::spawn( async move {
                let mut buf = vec![0u8; 4096];
                let n = socket.read( &mut buf).await.unwrap_or(0);
                let request = String::from_utf8_lossy( &buf[..n]);
                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();

                let (status,body) = match path.as_str() {
                    "/events.json" => ("200 OK", EVENTS),
                    "/capture.json" => ("200 OK", CAPTURE),
                    _ => ("404 Not Found", "not found"),
                };
                let response = format!("HTTP/1.1 {status}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}", body.len());
                let _ = socket.write_all( response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

#[tokio::test]
async fn test_get_events_and_capture() {
    let addr = serve().await;
    let client = TrafficClient::new();

    let events = client.get_events_metadata( &format!("http://{addr}/events.json")).await.unwrap();
    assert_eq!( events.len(), 1);
    assert_eq!( events[0].event.name, "Test Event");

    let capture = client.get_event_capture( &format!("http://{addr}{}", events[0].url)).await.unwrap();
    assert_eq!( capture.len(), 1);
    let (key,snapshot) = capture.snapshot_at(0).unwrap();
    assert_eq!( key, "20250301180000");
    assert_eq!( snapshot.features[0].data.callsign, "UAL1");
}

#[tokio::test]
async fn test_http_status_error() {
    let addr = serve().await;
    let client = TrafficClient::new();

    let res = client.get_event_capture( &format!("http://{addr}/missing.json")).await;
    assert!( matches!( res, Err(ReplayTrafficError::HttpStatusError(_))));
}

#[test]
fn test_request_tracker() {
    let mut tracker = RequestTracker::new();
    let t1 = tracker.next();
    assert!( tracker.is_current( t1));

    let t2 = tracker.next();
    assert!( t2 > t1);
    assert!( !tracker.is_current( t1)); // superseded response has to be discarded
    assert!( tracker.is_current( t2));

    tracker.invalidate();
    assert!( !tracker.is_current( t2));
    let t3 = tracker.next();
    assert!( t3 > t2 && tracker.is_current( t3));
}
