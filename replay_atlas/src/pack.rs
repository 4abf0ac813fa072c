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
use serde::{Serialize,Deserialize};
use crate::{IconAtlas, IconInfo, PackedRect, Result, ReplayAtlasError};

/// how icons are laid out in rows of `icons_per_row` columns
#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum PackingMode {
    /// variable width slots, rows are as high as their tallest icon
    #[default]
    Shelf,
    /// every icon gets a fixed (max_width x max_height) cell, which trades density for trivial cropping math
    UniformCell,
}

/// compute the sheet layout for a set of icons.
/// Icons are stable-sorted by descending height first so that ties keep their enumeration order, which
/// makes the result deterministic for a given input sequence
pub fn pack_icons (infos: &[IconInfo], icons_per_row: usize, mode: PackingMode)->Result<IconAtlas> {
    if infos.is_empty() {
        return Err( ReplayAtlasError::EmptyIconSet("cannot pack empty icon set".into()))
    }
    if icons_per_row == 0 {
        return Err( ReplayAtlasError::IllegalArgument("icons_per_row has to be > 0".into()))
    }

    let mut sorted: Vec<&IconInfo> = infos.iter().collect();
    sorted.sort_by( |a,b| b.height.cmp(&a.height));

    let max_width = sorted.iter().map(|i| i.width).max().unwrap_or(0);
    let max_height = sorted.iter().map(|i| i.height).max().unwrap_or(0);
    if max_width == 0 || max_height == 0 {
        return Err( ReplayAtlasError::InvalidDimensions("icons without extent".into()))
    }

    let sheet_width = u32::try_from(icons_per_row).ok()
        .and_then( |n| n.checked_mul(max_width))
        .ok_or_else(|| ReplayAtlasError::InvalidDimensions(format!("{icons_per_row} x {max_width} exceeds sheet width")))?;

    match mode {
        PackingMode::Shelf => pack_shelf( &sorted, sheet_width),
        PackingMode::UniformCell => pack_uniform( &sorted, icons_per_row, max_width, max_height),
    }
}

fn pack_shelf (sorted: &[&IconInfo], sheet_width: u32)->Result<IconAtlas> {
    let mut x: u32 = 0;
    let mut y: u32 = 0;
    let mut row_height: u32 = 0;
    let mut rects: Vec<(&str,PackedRect)> = Vec::with_capacity(sorted.len());

    for info in sorted {
        if x + info.width > sheet_width { // wrap to next row
            x = 0;
            y += row_height;
            row_height = 0;
        }
        row_height = row_height.max(info.height);

        rects.push( (info.key.as_str(), PackedRect::new( x, y, info.width, info.height)));
        x += info.width;
    }

    let mut atlas = IconAtlas::new( sheet_width, y + row_height);
    for (key,rect) in rects {
        atlas.insert( key, rect)?;
    }
    Ok(atlas)
}

fn pack_uniform (sorted: &[&IconInfo], icons_per_row: usize, cell_width: u32, cell_height: u32)->Result<IconAtlas> {
    let n_rows = sorted.len().div_ceil(icons_per_row) as u32;
    let mut atlas = IconAtlas::new( icons_per_row as u32 * cell_width, n_rows * cell_height);

    for (i,info) in sorted.iter().enumerate() {
        let col = (i % icons_per_row) as u32;
        let row = (i / icons_per_row) as u32;
        atlas.insert( &info.key, PackedRect::new( col * cell_width, row * cell_height, info.width, info.height))?;
    }
    Ok(atlas)
}
