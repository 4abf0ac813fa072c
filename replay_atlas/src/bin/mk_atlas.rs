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
use std::path::PathBuf;
use anyhow::Result;
use replay_common::{define_cli, check_cli, log::init_tracing};
use replay_atlas::{build_atlas, AtlasConfig, PackingMode};

define_cli! { ARGS [about="pack aircraft icon images into a sprite sheet with JSON icon mapping"] =
    icons_per_row: usize [help="number of icon columns in the sheet", long, default_value="10"],
    ext: String [help="extension of icon files to include", long, default_value="png"],
    uniform: bool [help="place icons in uniform max_width x max_height cells", long],
    scales_dir: Option<PathBuf> [help="optional directory for the aircraft.json scale factor file", long],
    icon_dir: PathBuf [help="directory with source icons (file stem is icon key)"],
    output_dir: PathBuf [help="directory to write atlas.png and iconMapping.json to"]
}

fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let mut config = AtlasConfig::new( &ARGS.icon_dir, &ARGS.output_dir);
    config.icons_per_row = ARGS.icons_per_row;
    config.extension = ARGS.ext.clone();
    config.scales_dir = ARGS.scales_dir.clone();
    config.mode = if ARGS.uniform { PackingMode::UniformCell } else { PackingMode::Shelf };

    let output = build_atlas( &config)?;
    println!("atlas:   {:?} ({}x{}, {} icons)", output.atlas_path, output.atlas.width, output.atlas.height, output.atlas.len());
    println!("mapping: {:?}", output.mapping_path);
    println!("scales:  {:?}", output.scales_path);

    Ok(())
}
