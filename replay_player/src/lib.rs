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

/// the runtime side of the traffic replay: a playback cursor over the snapshots of an event capture,
/// driven by user commands and a playback timer, and the derivation of render frames (filtered aircraft
/// with icons, labels and range rings) from the current snapshot.
///
/// All state lives in a single `Player` task that processes `PlayerMsg` messages and publishes a `Frame`
/// after each change. Front ends talk to it through a `PlayerHandle`

use replay_common::define_load_config;

pub mod errors;
pub use errors::{Result, ReplayPlayerError};

pub mod cursor;
pub use cursor::{Direction, Playback, PlaybackState, TimerCommand, DEFAULT_SPEED};

pub mod config;
pub use config::{ReplayConfig, Viewport};

pub mod frame;
pub use frame::{Frame, RenderItem, heading_angle, render_item};

pub mod state;
pub use state::AppState;

pub mod player;
pub use player::{spawn_player, PlayerHandle, PlayerMsg};

define_load_config!{}

/// load the icon lookup configured in `config` (if any)
pub fn load_icon_lookup (config: &ReplayConfig)->Result<Option<replay_atlas::IconLookup>> {
    match &config.icon_mapping {
        Some(path) => Ok( Some( replay_atlas::IconLookup::from_file( path, &config.default_icon)?)),
        None => Ok(None)
    }
}
