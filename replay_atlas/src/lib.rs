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

/// icon atlas support for the traffic replay.
/// This packs a directory of aircraft icon images into a single sprite sheet plus a JSON side-car
/// mapping (icon key -> rectangle/anchor) at build time, and resolves aircraft types to icons at runtime

use std::{collections::{BTreeMap,HashMap}, io::Cursor, path::{Path,PathBuf}};
use image::{imageops, ImageFormat, RgbaImage, Rgba};
use serde::{Serialize,Deserialize};
use tracing::{info,debug};
use replay_common::fs::{ensure_dir, files_with_extension, filestem, write_file_atomic};

mod errors;
pub use errors::{Result,ReplayAtlasError};

mod pack;
pub use pack::{pack_icons, PackingMode};

mod lookup;
pub use lookup::{IconLookup, ResolvedIcon};

pub const DEFAULT_ICONS_PER_ROW: usize = 10;
pub const DEFAULT_ICON_EXT: &str = "png";

pub const ATLAS_FILENAME: &str = "atlas.png";
pub const MAPPING_FILENAME: &str = "iconMapping.json";
pub const SCALES_FILENAME: &str = "aircraft.json";

/// one source icon image. The key is the lowercased file stem (e.g. the aircraft type code "b738")
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct IconInfo {
    pub key: String,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl IconInfo {
    /// probe the image header for its dimensions (this does not decode the image)
    pub fn from_path (path: impl AsRef<Path>)->Result<Self> {
        let path = path.as_ref();
        let key = filestem(&path)
            .ok_or_else(|| ReplayAtlasError::IllegalArgument(format!("no valid file stem in {path:?}")))?
            .to_lowercase();
        let (width,height) = image::image_dimensions(path)?;
        if width == 0 || height == 0 {
            return Err( ReplayAtlasError::InvalidDimensions( format!("{path:?} has empty dimensions {width}x{height}")))
        }

        Ok( IconInfo{ key, path: path.to_path_buf(), width, height } )
    }
}

/// position and anchor of one icon within the composed sheet.
/// The anchor is the center of the icon (not of the cell it was placed in)
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct PackedRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

impl PackedRect {
    pub fn new (x: u32, y: u32, width: u32, height: u32)->Self {
        PackedRect { x, y, width, height, anchor_x: width as f32 / 2.0, anchor_y: height as f32 / 2.0 }
    }

    #[inline] pub fn right (&self)->u32 { self.x + self.width }
    #[inline] pub fn bottom (&self)->u32 { self.y + self.height }

    pub fn overlaps (&self, other: &PackedRect)->bool {
        self.x < other.right() && other.x < self.right() && self.y < other.bottom() && other.y < self.bottom()
    }

    pub fn is_within (&self, width: u32, height: u32)->bool {
        self.right() <= width && self.bottom() <= height
    }
}

/// the side-car format that is consumed by the map icon layer
#[derive(Debug,Clone,Copy,PartialEq,Serialize,Deserialize)]
#[serde(rename_all="camelCase")]
pub struct IconMappingEntry {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub mask: bool,
    pub anchor_x: f32,
    pub anchor_y: f32,
}

impl From<&PackedRect> for IconMappingEntry {
    fn from (r: &PackedRect)->Self {
        IconMappingEntry { x: r.x, y: r.y, width: r.width, height: r.height, mask: true, anchor_x: r.anchor_x, anchor_y: r.anchor_y }
    }
}

pub type IconMapping = BTreeMap<String,IconMappingEntry>;

/// the result of packing: overall sheet dimensions and where each icon goes
#[derive(Debug,Clone,PartialEq)]
pub struct IconAtlas {
    pub width: u32,
    pub height: u32,
    icons: BTreeMap<String,PackedRect>,
    order: Vec<String>, // packing order, which is also the compositing order
}

impl IconAtlas {
    pub(crate) fn new (width: u32, height: u32)->Self {
        IconAtlas { width, height, icons: BTreeMap::new(), order: Vec::new() }
    }

    pub(crate) fn insert (&mut self, key: &str, rect: PackedRect)->Result<()> {
        if self.icons.insert( key.to_string(), rect).is_some() {
            return Err( ReplayAtlasError::DuplicateKey(key.to_string()))
        }
        self.order.push( key.to_string());
        Ok(())
    }

    pub fn get (&self, key: &str)->Option<&PackedRect> { self.icons.get(key) }
    pub fn len (&self)->usize { self.icons.len() }
    pub fn is_empty (&self)->bool { self.icons.is_empty() }

    /// icon keys in the order they were placed
    pub fn packing_order (&self)->&[String] { self.order.as_slice() }

    pub fn iter (&self)->impl Iterator<Item=(&String,&PackedRect)> { self.icons.iter() }

    pub fn to_mapping (&self)->IconMapping {
        self.icons.iter().map( |(k,r)| (k.clone(), IconMappingEntry::from(r))).collect()
    }

    /// keys are sorted so that identical input always produces identical output
    pub fn mapping_json (&self)->Result<String> {
        Ok( serde_json::to_string_pretty( &self.to_mapping())? )
    }
}

/// probe all icon files with the given extension in `dir` (enumerated in filename order).
/// Files with other extensions are ignored, accepted files that can't be probed are an error
pub fn read_icon_infos (dir: impl AsRef<Path>, ext: &str)->Result<Vec<IconInfo>> {
    let dir = dir.as_ref();
    let files = files_with_extension( &dir, ext)?;
    let mut infos = Vec::with_capacity( files.len());

    for path in &files {
        let info = IconInfo::from_path( path)?;
        debug!("icon {} : {}x{}", info.key, info.width, info.height);
        infos.push( info);
    }

    Ok(infos)
}

/// decode all icons and copy them into a transparent canvas at their packed positions.
/// Any icon that fails to decode (or changed its size since it was probed) aborts the operation
pub fn compose_atlas (infos: &[IconInfo], atlas: &IconAtlas)->Result<RgbaImage> {
    let by_key: HashMap<&str,&IconInfo> = infos.iter().map( |i| (i.key.as_str(), i)).collect();
    let mut canvas = RgbaImage::from_pixel( atlas.width, atlas.height, Rgba([0,0,0,0]));

    for key in atlas.packing_order() {
        let info = by_key.get( key.as_str()).ok_or_else(|| ReplayAtlasError::NotFoundError(format!("no icon info for {key}")))?;
        let rect = atlas.get( key).ok_or_else(|| ReplayAtlasError::NotFoundError(format!("no packed rect for {key}")))?;

        let icon = image::open( &info.path)?.to_rgba8();
        if icon.width() != rect.width || icon.height() != rect.height {
            return Err( ReplayAtlasError::InvalidDimensions( format!("{:?} is {}x{} but was packed as {}x{}",
                    info.path, icon.width(), icon.height(), rect.width, rect.height)))
        }
        imageops::replace( &mut canvas, &icon, rect.x as i64, rect.y as i64);
    }

    Ok(canvas)
}

/// relative icon sizes, normalized to the smallest dimension of any icon
pub fn aircraft_scales (infos: &[IconInfo])->BTreeMap<String,f64> {
    let min_width = infos.iter().map(|i| i.width).min().unwrap_or(1);
    let min_height = infos.iter().map(|i| i.height).min().unwrap_or(1);
    let min_dim = min_width.min(min_height).max(1) as f64;

    infos.iter().map( |i| (i.key.clone(), i.width.min(i.height) as f64 / min_dim)).collect()
}

/* #region atlas builder **************************************************************************/

#[derive(Debug,Clone,Serialize,Deserialize)]
pub struct AtlasConfig {
    pub icon_dir: PathBuf,
    pub output_dir: PathBuf,
    pub scales_dir: Option<PathBuf>, // where to write aircraft.json (output_dir if not set)
    pub icons_per_row: usize,
    pub extension: String,
    pub mode: PackingMode,
}

impl AtlasConfig {
    pub fn new (icon_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>)->Self {
        AtlasConfig {
            icon_dir: icon_dir.into(),
            output_dir: output_dir.into(),
            scales_dir: None,
            icons_per_row: DEFAULT_ICONS_PER_ROW,
            extension: DEFAULT_ICON_EXT.to_string(),
            mode: PackingMode::default(),
        }
    }
}

#[derive(Debug)]
pub struct AtlasOutput {
    pub atlas: IconAtlas,
    pub atlas_path: PathBuf,
    pub mapping_path: PathBuf,
    pub scales_path: PathBuf,
}

/// the complete build step: probe, pack, compose and write sheet, mapping and scales.
/// Nothing is written before all icons have been decoded and composed
pub fn build_atlas (config: &AtlasConfig)->Result<AtlasOutput> {
    let infos = read_icon_infos( &config.icon_dir, &config.extension)?;
    if infos.is_empty() {
        return Err( ReplayAtlasError::EmptyIconSet( format!("no *.{} files in {:?}", config.extension, config.icon_dir)))
    }

    let atlas = pack_icons( &infos, config.icons_per_row, config.mode)?;
    let canvas = compose_atlas( &infos, &atlas)?;

    let mut png: Vec<u8> = Vec::new();
    canvas.write_to( &mut Cursor::new(&mut png), ImageFormat::Png)?;
    let mapping = atlas.mapping_json()?;
    let scales = serde_json::to_string_pretty( &aircraft_scales(&infos))?;

    let scales_dir = config.scales_dir.as_ref().unwrap_or( &config.output_dir);
    ensure_dir( &config.output_dir)?;
    ensure_dir( scales_dir)?;

    let atlas_path = config.output_dir.join(ATLAS_FILENAME);
    let mapping_path = config.output_dir.join(MAPPING_FILENAME);
    let scales_path = scales_dir.join(SCALES_FILENAME);

    write_file_atomic( &atlas_path, &png)?;
    write_file_atomic( &mapping_path, mapping.as_bytes())?;
    write_file_atomic( &scales_path, scales.as_bytes())?;

    info!("packed {} icons into {}x{} atlas {:?}", atlas.len(), atlas.width, atlas.height, atlas_path);
    Ok( AtlasOutput{ atlas, atlas_path, mapping_path, scales_path } )
}

/* #endregion atlas builder */
