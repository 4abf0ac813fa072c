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

use std::path::PathBuf;
use replay_atlas::*;

// run with "cargo test test_xx -- --nocapture"

fn icon (key: &str, width: u32, height: u32)->IconInfo {
    IconInfo{ key: key.to_string(), path: PathBuf::from( format!("{key}.png")), width, height }
}

/// a reproducible pseudo random icon set (LCG, no need for a rand dependency)
fn icon_set (n: usize, seed: u64)->Vec<IconInfo> {
    let mut s = seed;
    let mut next = move |m: u64| { s = s.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407); 1 + ((s >> 33) % m) as u32 };
    (0..n).map( |i| { let w = next(64); let h = next(64); icon( &format!("ac{i:02}"), w, h) }).collect()
}

fn assert_valid_layout (infos: &[IconInfo], atlas: &IconAtlas) {
    assert_eq!( atlas.len(), infos.len());
    let rects: Vec<&PackedRect> = atlas.iter().map(|(_,r)| r).collect();

    for (i,r) in rects.iter().enumerate() {
        assert!( r.is_within( atlas.width, atlas.height), "{r:?} outside of {}x{}", atlas.width, atlas.height);
        for r2 in &rects[i+1..] {
            assert!( !r.overlaps(r2), "{r:?} overlaps {r2:?}");
        }
    }

    for info in infos {
        let r = atlas.get(&info.key).unwrap();
        assert_eq!( (r.width,r.height), (info.width,info.height));
        assert_eq!( (r.anchor_x,r.anchor_y), (info.width as f32 / 2.0, info.height as f32 / 2.0));
    }
}

#[test]
fn test_shelf_no_overlap() {
    for (n,seed) in [(1,1), (7,2), (10,3), (11,4), (45,5), (100,6)] {
        let infos = icon_set(n, seed);
        for per_row in [1, 3, 10] {
            let atlas = pack_icons( &infos, per_row, PackingMode::Shelf).unwrap();
            assert_valid_layout( &infos, &atlas);
        }
    }
}

#[test]
fn test_uniform_no_overlap() {
    for (n,seed) in [(1,11), (9,12), (10,13), (23,14)] {
        let infos = icon_set(n, seed);
        let atlas = pack_icons( &infos, 4, PackingMode::UniformCell).unwrap();
        assert_valid_layout( &infos, &atlas);

        let max_w = infos.iter().map(|i| i.width).max().unwrap();
        let max_h = infos.iter().map(|i| i.height).max().unwrap();
        assert_eq!( atlas.width, 4 * max_w);
        assert_eq!( atlas.height, n.div_ceil(4) as u32 * max_h);
        for (_,r) in atlas.iter() {
            assert_eq!( r.x % max_w, 0);
            assert_eq!( r.y % max_h, 0);
        }
    }
}

#[test]
fn test_shelf_wrap() {
    let infos = vec![ icon("d",10,10), icon("a",10,20), icon("c",5,10), icon("b",10,20) ];
    let atlas = pack_icons( &infos, 2, PackingMode::Shelf).unwrap();

    // sorted by height (stable): a, b, d, c
    assert_eq!( atlas.packing_order(), &["a", "b", "d", "c"]);
    assert_eq!( (atlas.width, atlas.height), (20, 30));

    let pos = |k: &str| { let r = atlas.get(k).unwrap(); (r.x, r.y) };
    assert_eq!( pos("a"), (0,0));
    assert_eq!( pos("b"), (10,0));
    assert_eq!( pos("d"), (0,20));
    assert_eq!( pos("c"), (10,20));
}

#[test]
fn test_stable_ties() {
    let infos = vec![ icon("z",8,8), icon("m",4,8), icon("a",6,8) ];
    let atlas = pack_icons( &infos, 10, PackingMode::Shelf).unwrap();
    assert_eq!( atlas.packing_order(), &["z", "m", "a"]);
    assert_eq!( atlas.get("m").unwrap().x, 8);
    assert_eq!( atlas.get("a").unwrap().x, 12);
}

#[test]
fn test_deterministic_mapping() {
    let infos = icon_set( 37, 42);
    let m1 = pack_icons( &infos, 10, PackingMode::Shelf).unwrap().mapping_json().unwrap();
    let m2 = pack_icons( &infos, 10, PackingMode::Shelf).unwrap().mapping_json().unwrap();
    assert_eq!( m1, m2);
}

#[test]
fn test_invalid_input() {
    assert!( matches!( pack_icons( &[], 10, PackingMode::Shelf), Err(ReplayAtlasError::EmptyIconSet(_))));
    assert!( matches!( pack_icons( &[icon("a",1,1)], 0, PackingMode::Shelf), Err(ReplayAtlasError::IllegalArgument(_))));
    assert!( matches!( pack_icons( &[icon("a",1,1), icon("a",2,2)], 10, PackingMode::Shelf), Err(ReplayAtlasError::DuplicateKey(_))));
}

#[test]
fn test_mapping_format() {
    let atlas = pack_icons( &[icon("b738",30,20)], 10, PackingMode::Shelf).unwrap();
    let json: serde_json::Value = serde_json::from_str( &atlas.mapping_json().unwrap()).unwrap();
    let e = &json["b738"];
    assert_eq!( e["x"], 0);
    assert_eq!( e["width"], 30);
    assert_eq!( e["mask"], true);
    assert_eq!( e["anchorX"], 15.0);
    assert_eq!( e["anchorY"], 10.0);
}

#[test]
fn test_aircraft_scales() {
    let scales = aircraft_scales( &[icon("c172",10,20), icon("b744",30,20), icon("a388",40,40)]);
    assert_eq!( scales["c172"], 1.0);
    assert_eq!( scales["b744"], 2.0);
    assert_eq!( scales["a388"], 4.0);
}
