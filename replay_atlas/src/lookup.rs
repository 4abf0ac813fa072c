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
use std::path::Path;
use replay_common::fs::file_contents_as_bytes;
use crate::{IconAtlas, IconMapping, IconMappingEntry, Result, ReplayAtlasError};

/// the icon we use to draw a given aircraft
#[derive(Debug,Clone,Copy,PartialEq)]
pub struct ResolvedIcon<'a> {
    pub key: &'a str,
    pub entry: &'a IconMappingEntry,
    pub is_default: bool,
}

/// runtime side of the atlas: maps aircraft type codes (e.g. flight plan `aircraft_short`) to icons,
/// using a default icon for unknown or missing types
#[derive(Debug,Clone)]
pub struct IconLookup {
    mapping: IconMapping,
    default_key: String,
    default_entry: IconMappingEntry,
}

impl IconLookup {
    pub fn new (mapping: IconMapping, default_key: &str)->Result<Self> {
        let default_key = default_key.to_lowercase();
        let default_entry = *mapping.get( &default_key)
            .ok_or_else(|| ReplayAtlasError::NotFoundError( format!("default icon '{default_key}' not in mapping")))?;
        Ok( IconLookup{ mapping, default_key, default_entry } )
    }

    pub fn from_atlas (atlas: &IconAtlas, default_key: &str)->Result<Self> {
        Self::new( atlas.to_mapping(), default_key)
    }

    /// read a iconMapping.json side-car
    pub fn from_file (path: impl AsRef<Path>, default_key: &str)->Result<Self> {
        let data = file_contents_as_bytes( path)?;
        let mapping: IconMapping = serde_json::from_slice( &data)?;
        Self::new( mapping, default_key)
    }

    pub fn len (&self)->usize { self.mapping.len() }
    pub fn contains (&self, key: &str)->bool { self.mapping.contains_key( &key.to_lowercase()) }

    pub fn resolve (&self, aircraft_type: Option<&str>)->ResolvedIcon<'_> {
        if let Some(t) = aircraft_type {
            let key = t.trim().to_lowercase();
            if let Some((k,entry)) = self.mapping.get_key_value( &key) {
                return ResolvedIcon{ key: k.as_str(), entry, is_default: false }
            }
        }
        self.default_icon()
    }

    pub fn default_icon (&self)->ResolvedIcon<'_> {
        ResolvedIcon{ key: self.default_key.as_str(), entry: &self.default_entry, is_default: true }
    }
}
