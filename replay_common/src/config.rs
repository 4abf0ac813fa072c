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
use std::{env, path::{Path,PathBuf}};
pub use serde::de::DeserializeOwned;

use crate::{define_error, fs::file_contents_as_bytes};

pub type Result<T> = std::result::Result<T,ConfigError>;

define_error!{ pub ConfigError =
    IOError( #[from] std::io::Error) : "IO error {0}",
    RonError( #[from] ron::error::SpannedError) : "config RON error {0}",
    ResourceNotFoundError(String) : "config not found {0}"
}

pub const CONFIGS: &str = "configs";

/// env var that points to an explicit (external) root for config files
pub const REPLAY_HOME: &str = "REPLAY_HOME";

/// look up a config file for a given crate. We check (in this order)
///   - `$REPLAY_HOME/configs/<crate>/<filename>`
///   - `~/.replay/configs/<crate>/<filename>`
///   - `<crate-dir>/configs/<filename>` (the in-repo defaults)
///
/// which allows users to override in-repo configs without touching the sources
pub fn find_config_file (resource_crate: &str, crate_dir: &str, filename: &str)->Option<PathBuf> {
    if let Ok(home) = env::var(REPLAY_HOME) {
        let path = Path::new(&home).join(CONFIGS).join(resource_crate).join(filename);
        if path.is_file() { return Some(path) }
    }

    if let Ok(usr_home) = env::var("HOME") {
        let path = Path::new(&usr_home).join(".replay").join(CONFIGS).join(resource_crate).join(filename);
        if path.is_file() { return Some(path) }
    }

    let path = Path::new(crate_dir).join(CONFIGS).join(filename);
    if path.is_file() { return Some(path) }

    None
}

pub fn load_config_path<C,P> (path: P)->Result<C> where C: DeserializeOwned, P: AsRef<Path> {
    let data = file_contents_as_bytes(path.as_ref())?;
    Ok( ron::de::from_bytes( data.as_slice())? )
}

pub fn load_crate_config<C> (resource_crate: &str, crate_dir: &str, filename: &str)->Result<C> where C: DeserializeOwned {
    match find_config_file( resource_crate, crate_dir, filename) {
        Some(path) => {
            tracing::debug!("loading config {:?}", path);
            load_config_path(path)
        }
        None => Err( ConfigError::ResourceNotFoundError(filename.to_string()))
    }
}

/// this is the macro that needs to be expanded at the top of crates (lib.rs) that define configs.
/// Config users call the defined `load_config(..)` function to instantiate config structs
#[macro_export]
macro_rules! define_load_config {
    () => {
        /// load a RON config of this crate (see `replay_common::config::find_config_file` for lookup order)
        pub fn load_config<C> (filename: &str)->$crate::config::Result<C> where C: $crate::config::DeserializeOwned {
            $crate::config::load_crate_config( env!("CARGO_PKG_NAME"), env!("CARGO_MANIFEST_DIR"), filename)
        }
    }
}
