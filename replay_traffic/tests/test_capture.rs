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

use replay_traffic::*;

// run with "cargo test --test test_capture -- --nocapture"

const CAPTURE: &str = r#"{
  "config": {
    "name": "Bay Area Fly-In",
    "artccs": ["ZOA"],
    "airports": ["KSFO", "KOAK"],
    "advertised_start_time": "2025-03-01T18:00:00Z",
    "advertised_end_time": "2025-03-01T22:00:00Z"
  },
  "first_timestamp_key": "20250301180000",
  "last_timestamp_key": "20250301180030",
  "captures": {
    "20250301180030": { "type": "FeatureCollection", "features": [] },
    "20250301180000": {
      "type": "FeatureCollection",
      "features": [
        {
          "type": "Feature",
          "id": 1234567,
          "geometry": { "type": "Point", "coordinates": [-122.37, 37.62] },
          "properties": { "data": {
            "cid": 1234567, "name": "Jane Doe", "callsign": "UAL123",
            "latitude": 37.62, "longitude": -122.37, "altitude": 3500, "groundspeed": 210,
            "transponder": "4521", "heading": 280,
            "flight_plan": { "flight_rules": "I", "aircraft": "B738/L", "aircraft_faa": "B738/L", "aircraft_short": "B738",
                             "departure": "KSFO", "arrival": "KLAX", "alternate": "", "altitude": "35000",
                             "route": "SSTIK5 SSTIK", "revision_id": 2 },
            "logon_time": "2025-03-01T17:10:00Z", "last_updated": "2025-03-01T18:00:00Z"
          }}
        },
        {
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [-122.2, 37.7] },
          "properties": { "data": { "callsign": "N172SP", "latitude": 37.7, "longitude": -122.2 } }
        },
        {
          "type": "Feature",
          "geometry": { "type": "Point", "coordinates": [-122.0, 37.0] },
          "properties": { "name": "no pilot data" }
        }
      ]
    }
  },
  "captures_length_bytes": 1234,
  "viewport_center": { "x": -122.3, "y": 37.7 }
}"#;

#[test]
fn test_parse_capture() {
    let capture = parse_event_capture( CAPTURE.as_bytes()).unwrap();
    assert_eq!( capture.name(), "Bay Area Fly-In");
    assert_eq!( capture.timestamps(), &["20250301180000".to_string(), "20250301180030".to_string()]);
    assert_eq!( capture.viewport_center, ViewportCenter::from_lon_lat( -122.3, 37.7));
    assert_eq!( capture.captures_length_bytes, 1234);

    let (key,snapshot) = capture.snapshot_at(0).unwrap();
    assert_eq!( key, "20250301180000");
    assert_eq!( snapshot.len(), 2); // the feature without properties.data is dropped

    let ual = &snapshot.features[0];
    assert_eq!( ual.id, Some(1234567));
    assert_eq!( ual.data.groundspeed, Some(210.0));
    assert_eq!( ual.data.aircraft_type(), Some("B738"));
    println!("{}", ual.data);

    let ga = &snapshot.features[1];
    assert_eq!( ga.id, None);
    assert_eq!( ga.data.groundspeed, None);
    assert!( ga.data.flight_plan.is_none());
    assert_eq!( ga.data.aircraft_type(), None);

    assert!( capture.snapshot_at(1).unwrap().1.is_empty());
    assert!( capture.snapshot_at(2).is_none());
}

#[test]
fn test_capture_serialization() {
    let capture = parse_event_capture( CAPTURE.as_bytes()).unwrap();
    let ec = capture.to_event_capture().unwrap();
    assert_eq!( ec.first_timestamp_key.as_deref(), Some("20250301180000"));
    assert_eq!( ec.last_timestamp_key.as_deref(), Some("20250301180030"));

    let json = serde_json::to_string( &ec).unwrap();
    let reparsed = parse_event_capture( json.as_bytes()).unwrap();
    assert_eq!( reparsed.timestamps(), capture.timestamps());
    assert_eq!( reparsed.snapshot_at(0).unwrap().1, capture.snapshot_at(0).unwrap().1);
}

#[test]
fn test_invalid_capture() {
    assert!( matches!( parse_event_capture( b"{ \"config\": 42 }"), Err(ReplayTrafficError::SerdeError(_))));
    assert!( load_capture_file( "does/not/exist.json").is_err());
}

#[test]
fn test_events_metadata() {
    let json = r#"[
      { "event": { "name": "Bay Area Fly-In", "artccs": ["ZOA"], "airports": ["KSFO"],
                   "advertised_start_time": "2025-03-01T18:00:00Z", "advertised_end_time": "2025-03-01T22:00:00Z" },
        "url": "https://example.com/captures/2025-03-01-bay-area-fly-in.json" }
    ]"#;
    let events = parse_events_metadata( json.as_bytes()).unwrap();
    assert_eq!( events.len(), 1);
    assert_eq!( events[0].event.airports, vec!["KSFO"]);
    assert_eq!( event_slug( &events[0].event), "2025-03-01-bay-area-fly-in");
}

#[test]
fn test_labels() {
    let capture = parse_event_capture( CAPTURE.as_bytes()).unwrap();
    let snapshot = capture.snapshot_at(0).unwrap().1;
    let ual = &snapshot.features[0].data;
    let ga = &snapshot.features[1].data;

    let mut labels = LabelConfig::default();
    assert_eq!( label_text( ual, &labels), "UAL123");

    labels.speed = true;
    labels.altitude = true;
    labels.departure = true;
    labels.destination = true;
    assert_eq!( label_text( ual, &labels), "UAL123\n210kts\n3500ft\nKSFO\nKLAX");
    assert_eq!( label_text( ga, &labels), "N172SP\n0ft"); // no speed, no flight plan

    labels.callsign = false;
    labels.altitude = false;
    assert_eq!( label_text( ual, &labels), "210kts\nKSFO\nKLAX");

    let none = LabelConfig { callsign: false, ..LabelConfig::default() };
    assert!( none.is_empty());
    assert_eq!( label_text( ual, &none), "");
}

#[test]
fn test_rings() {
    let mut rings = RingConfig::default();
    assert!( !rings.visible);
    assert_eq!( ring_radius_meters( &rings), 3.0 * 1852.0);

    rings.set_distance_nm( 80.0);
    assert_eq!( rings.distance_nm, 50.0);
    rings.set_distance_nm( f64::NAN);
    assert_eq!( rings.distance_nm, 50.0);
    rings.set_distance_nm( 0.5);
    assert_eq!( rings.radius_meters(), 926.0);

    // directly constructed or deserialized configs are clamped too
    let far = RingConfig { visible: true, distance_nm: 80.0 };
    assert_eq!( ring_radius_meters( &far), 50.0 * 1852.0);
    assert_eq!( far.normalized().distance_nm, 50.0);

    let negative = RingConfig { visible: true, distance_nm: -5.0 };
    assert_eq!( ring_radius_meters( &negative), 0.0);
    assert_eq!( negative.normalized().distance_nm, 0.0);

    let nan = RingConfig { visible: true, distance_nm: f64::NAN };
    assert_eq!( nan.normalized().distance_nm, 3.0);

    let from_ron: RingConfig = ron::from_str( "(visible: true, distance_nm: 120.0)").unwrap();
    assert_eq!( from_ron.radius_meters(), 50.0 * 1852.0);
}
