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

use std::{fs, path::Path};
use image::{Rgba, RgbaImage, GenericImageView};
use replay_atlas::*;

// run with "cargo test test_xx -- --nocapture"

fn write_icon (dir: &Path, name: &str, width: u32, height: u32, color: [u8;4]) {
    RgbaImage::from_pixel( width, height, Rgba(color)).save( dir.join(name)).unwrap();
}

fn icon_dir ()->tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write_icon( dir.path(), "B738.png", 32, 28, [255,0,0,255]);
    write_icon( dir.path(), "a320.png", 30, 26, [0,255,0,255]);
    write_icon( dir.path(), "c172.png", 12, 10, [0,0,255,255]);
    write_icon( dir.path(), "e175.png", 24, 20, [255,255,0,255]);
    fs::write( dir.path().join("notes.txt"), "not an icon").unwrap();
    dir
}

#[test]
fn test_build_atlas() {
    let icons = icon_dir();
    let out = tempfile::tempdir().unwrap();
    let mut config = AtlasConfig::new( icons.path(), out.path().join("public"));
    config.scales_dir = Some( out.path().join("data"));
    config.icons_per_row = 2;

    let output = build_atlas( &config).unwrap();
    assert_eq!( output.atlas.len(), 4);

    let sheet = image::open( &output.atlas_path).unwrap();
    assert_eq!( sheet.dimensions(), (output.atlas.width, output.atlas.height));

    // each icon is found at its mapped position, keys are lowercased
    let mapping: IconMapping = serde_json::from_str( &fs::read_to_string(&output.mapping_path).unwrap()).unwrap();
    assert_eq!( mapping.keys().collect::<Vec<_>>(), vec!["a320", "b738", "c172", "e175"]);
    let e = mapping["b738"];
    assert_eq!( sheet.get_pixel( e.x, e.y), Rgba([255,0,0,255]));
    assert_eq!( sheet.get_pixel( e.x + e.width - 1, e.y + e.height - 1), Rgba([255,0,0,255]));
    let e = mapping["c172"];
    assert_eq!( sheet.get_pixel( e.x + 5, e.y + 5), Rgba([0,0,255,255]));

    let scales: serde_json::Value = serde_json::from_str( &fs::read_to_string(&output.scales_path).unwrap()).unwrap();
    assert_eq!( scales["c172"], 1.0);
    assert_eq!( scales["a320"], 2.6);
    assert!( output.scales_path.starts_with( out.path().join("data")));
}

#[test]
fn test_build_is_reproducible() {
    let icons = icon_dir();
    let out1 = tempfile::tempdir().unwrap();
    let out2 = tempfile::tempdir().unwrap();

    let o1 = build_atlas( &AtlasConfig::new( icons.path(), out1.path())).unwrap();
    let o2 = build_atlas( &AtlasConfig::new( icons.path(), out2.path())).unwrap();
    assert_eq!( fs::read(&o1.mapping_path).unwrap(), fs::read(&o2.mapping_path).unwrap());

    // existing output dir is fine
    build_atlas( &AtlasConfig::new( icons.path(), out1.path())).unwrap();
}

#[test]
fn test_empty_icon_dir() {
    let icons = tempfile::tempdir().unwrap();
    fs::write( icons.path().join("readme.md"), "no icons here").unwrap();
    let out = tempfile::tempdir().unwrap();

    let res = build_atlas( &AtlasConfig::new( icons.path(), out.path()));
    assert!( matches!( res, Err(ReplayAtlasError::EmptyIconSet(_))));
    assert!( !out.path().join(ATLAS_FILENAME).exists());
}

#[test]
fn test_corrupt_icon_aborts() {
    let icons = icon_dir();
    fs::write( icons.path().join("zz99.png"), b"definitely not a png").unwrap();
    let out = tempfile::tempdir().unwrap();

    assert!( build_atlas( &AtlasConfig::new( icons.path(), out.path())).is_err());
    assert!( !out.path().join(ATLAS_FILENAME).exists());
    assert!( !out.path().join(MAPPING_FILENAME).exists());
}

#[test]
fn test_icon_lookup() {
    let icons = icon_dir();
    let out = tempfile::tempdir().unwrap();
    let output = build_atlas( &AtlasConfig::new( icons.path(), out.path())).unwrap();

    let lookup = IconLookup::from_file( &output.mapping_path, "A320").unwrap();
    assert_eq!( lookup.len(), 4);

    let icon = lookup.resolve( Some("B738"));
    assert_eq!( icon.key, "b738");
    assert!( !icon.is_default);
    assert_eq!( icon.entry.width, 32);

    let icon = lookup.resolve( Some("ZZZZ"));
    assert_eq!( icon.key, "a320");
    assert!( icon.is_default);

    assert!( lookup.resolve(None).is_default);
    assert!( IconLookup::from_file( &output.mapping_path, "md11").is_err());
}
