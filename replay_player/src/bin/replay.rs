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
use anyhow::{anyhow, Result};
use replay_common::{define_cli, check_cli, config::{load_config_path, ConfigError}, log::init_tracing};
use replay_traffic::{load_capture_file, RouteFilter, TrafficClient};
use replay_player::{load_config, load_icon_lookup, spawn_player, AppState, Frame, ReplayConfig};

define_cli! { ARGS [about="headless replay of VATSIM event captures that prints the displayed aircraft for each snapshot"] =
    config: Option<PathBuf> [help="RON config file (default is replay.ron from the config dirs)", long],
    capture: Option<PathBuf> [help="replay a local capture file instead of a published event", long],
    event: Option<usize> [help="index of published event to replay (use --list-events to see them)", long],
    list_events: bool [help="list published events and exit", long],
    speed: Option<f64> [help="playback speed multiplier (one of the configured speeds)", long],
    route: Vec<RouteFilter> [help="route filter DEP-ARR, each side a 4 letter ICAO code or '*' (can be repeated)", long],
    hide_slow: bool [help="hide aircraft below the groundspeed threshold", long],
    rings: bool [help="compute range rings", long],
    json: bool [help="print frames as JSON", long],
    max_items: usize [help="max number of aircraft to print per frame", long, default_value="10"]
}

#[tokio::main]
async fn main()->Result<()> {
    check_cli!(ARGS);
    init_tracing();

    let config = get_config()?;
    let client = TrafficClient::new();

    let mut state = AppState::new( &config, load_icon_lookup( &config)?)?;
    state.filter.hide_slow_aircraft = ARGS.hide_slow;
    for filter in &ARGS.route {
        state.filter.route_filters.add( filter.clone());
    }
    state.rings.visible |= ARGS.rings;
    if let Some(speed) = ARGS.speed {
        state.set_speed( speed)?;
    }

    let (player, jh) = spawn_player( state, client.clone());
    let mut frames = player.subscribe();

    if let Some(path) = &ARGS.capture {
        player.load_capture( load_capture_file( path)?).await?;
    } else {
        let url = config.events_metadata_url.as_ref().ok_or_else(|| anyhow!("no events_metadata_url configured"))?;
        let events = client.get_events_metadata( url).await?;

        let Some(idx) = ARGS.event.filter(|_| !ARGS.list_events) else {
            for (i,e) in events.iter().enumerate() {
                println!("{i:3}: {} ({} - {})", e.event.name, e.event.advertised_start_time, e.event.advertised_end_time);
            }
            player.terminate().await?;
            jh.await?;
            return Ok(())
        };

        let event = events.get(idx).ok_or_else(|| anyhow!("no event with index {idx} ({} events)", events.len()))?;
        let url = event.url.clone();
        player.set_events( events.clone()).await?;
        player.select_event( url).await?;
    }

    frames.wait_for( |f| f.event.is_some()).await?;
    player.play().await?;

    let mut last_index: Option<usize> = None;
    loop {
        tokio::select! {
            res = frames.changed() => {
                if res.is_err() { break }
                let frame = frames.borrow_and_update().clone();
                if last_index != Some(frame.index) {
                    print_frame( &frame)?;
                    last_index = Some(frame.index);
                }
                if !frame.is_playing() && frame.index + 1 >= frame.len { break }
            }
            _ = tokio::signal::ctrl_c() => break
        }
    }

    player.terminate().await?;
    jh.await?;
    Ok(())
}

fn get_config ()->Result<ReplayConfig> {
    if let Some(path) = &ARGS.config {
        Ok( load_config_path( path)? )
    } else {
        match load_config( "replay.ron") {
            Ok(config) => Ok(config),
            Err(ConfigError::ResourceNotFoundError(_)) => Ok( ReplayConfig::default()),
            Err(e) => Err( e.into())
        }
    }
}

fn print_frame (frame: &Frame)->Result<()> {
    if ARGS.json {
        println!("{}", serde_json::to_string( frame)?);
    } else {
        println!("{frame}");
        for item in frame.items.iter().take( ARGS.max_items) {
            println!("    {:<10} {:9.4},{:10.4} {:5.1}° {:<6} {}",
                item.callsign, item.latitude, item.longitude, item.angle,
                item.icon.as_deref().unwrap_or("-"), item.label.replace('\n', " | "));
        }
        if frame.items.len() > ARGS.max_items {
            println!("    ... {} more", frame.items.len() - ARGS.max_items);
        }
    }
    Ok(())
}
