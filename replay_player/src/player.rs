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
use std::time::Duration;
use tokio::{sync::{mpsc, watch}, task::{AbortHandle, JoinHandle}, time::{interval, MissedTickBehavior}};
use tracing::{debug,info,warn};
use replay_traffic::{
    Capture, EventMetadata, LabelConfig, RequestToken, RingConfig, RouteFilter, TrafficClient, ReplayTrafficError
};

use crate::{
    state::AppState,
    cursor::{Direction, TimerCommand},
    frame::Frame,
    errors::{Result, ReplayPlayerError},
};

pub const DEFAULT_CHANNEL_BOUND: usize = 64;

/// the messages that drive the player. User commands, timer ticks and fetch results all go through the
/// same channel so that the player task is the only one that mutates state
#[derive(Debug)]
pub enum PlayerMsg {
    Play,
    Pause,
    Toggle,
    Step(Direction),
    Seek(i64),
    BeginScrub,
    EndScrub,
    SetSpeed(f64),

    /// sent by the playback timer. Ticks of replaced timers are ignored
    Tick { timer_id: u64 },

    SetEvents(Vec<EventMetadata>),
    /// fetch the capture of the event with this url
    SelectEvent(String),
    CaptureLoaded { token: RequestToken, result: std::result::Result<Capture,ReplayTrafficError> },
    /// directly set a capture (e.g. loaded from file)
    LoadCapture(Box<Capture>),

    AddRouteFilter(RouteFilter),
    RemoveRouteFilter(RouteFilter),
    ClearRouteFilters,
    SetHideSlowAircraft(bool),
    SetLabels(LabelConfig),
    SetRings(RingConfig),

    Terminate,
}

/// the task that owns the application state and the playback timer
pub struct Player {
    state: AppState,
    client: TrafficClient,
    hself: mpsc::WeakSender<PlayerMsg>, // weak so that dropping all handles ends the player
    rx: mpsc::Receiver<PlayerMsg>,
    frame_tx: watch::Sender<Frame>,
    timer: Option<AbortHandle>,
    timer_id: u64,
}

impl Player {
    async fn run (mut self) {
        debug!("player started");

        while let Some(msg) = self.rx.recv().await {
            if let PlayerMsg::Terminate = msg {
                break
            }
            if self.handle_msg( msg) {
                self.publish();
            }
        }

        self.cancel_timer();
        debug!("player terminated");
    }

    /// returns true if the state might have changed
    fn handle_msg (&mut self, msg: PlayerMsg)->bool {
        use PlayerMsg::*;

        let playback = &mut self.state.playback;
        let cmd = match msg {
            Play => playback.play(),
            Pause => playback.pause(),
            Toggle => playback.toggle(),
            Step(dir) => playback.step(dir),
            Seek(idx) => playback.seek(idx),
            BeginScrub => playback.begin_scrub(),
            EndScrub => playback.end_scrub(),
            SetSpeed(speed) => match self.state.set_speed( speed) {
                Ok(cmd) => cmd,
                Err(e) => { warn!("{e}"); return false }
            }

            Tick{timer_id} => {
                if timer_id != self.timer_id || self.timer.is_none() {
                    return false // left over from a replaced timer
                }
                playback.tick()
            }

            SetEvents(events) => { self.state.events = events; TimerCommand::Keep }
            SelectEvent(url) => { self.fetch_capture( url); TimerCommand::Keep }
            CaptureLoaded{token,result} => match result {
                Ok(capture) => match self.state.commit_capture( token, capture) {
                    Some(cmd) => cmd,
                    None => return false
                }
                Err(e) => {
                    warn!("failed to load capture: {e}");
                    return false
                }
            }
            LoadCapture(capture) => self.state.set_capture( *capture),

            AddRouteFilter(filter) => { self.state.filter.route_filters.add( filter); TimerCommand::Keep }
            RemoveRouteFilter(filter) => { self.state.filter.route_filters.remove( &filter); TimerCommand::Keep }
            ClearRouteFilters => { self.state.filter.route_filters.clear(); TimerCommand::Keep }
            SetHideSlowAircraft(hide) => { self.state.filter.hide_slow_aircraft = hide; TimerCommand::Keep }
            SetLabels(labels) => { self.state.labels = labels; TimerCommand::Keep }
            SetRings(rings) => { self.state.rings = rings.normalized(); TimerCommand::Keep }

            Terminate => return false // handled in run
        };

        self.apply_cmd( cmd);
        true
    }

    fn fetch_capture (&mut self, url: String) {
        let token = self.state.select_event( &url);
        let client = self.client.clone();
        let hself = self.hself.clone();

        tokio::spawn( async move {
            debug!("fetching capture {url}");
            let result = client.get_event_capture( &url).await;
            if let Some(tx) = hself.upgrade() {
                let _ = tx.send( PlayerMsg::CaptureLoaded{ token, result }).await;
            }
        });
    }

    fn apply_cmd (&mut self, cmd: TimerCommand) {
        match cmd {
            TimerCommand::Keep => {}
            TimerCommand::Start(period) => self.start_timer( period),
            TimerCommand::Cancel => self.cancel_timer(),
        }
    }

    /// replaces the current timer (if any). The first tick is sent one period after start
    fn start_timer (&mut self, period: Duration) {
        self.cancel_timer();
        self.timer_id += 1;
        let timer_id = self.timer_id;
        let hself = self.hself.clone();

        let th = tokio::spawn( async move {
            let mut interval = interval( period);
            interval.set_missed_tick_behavior( MissedTickBehavior::Delay);
            interval.tick().await; // the first tick completes immediately

            loop {
                interval.tick().await;
                let Some(tx) = hself.upgrade() else { break };
                if tx.send( PlayerMsg::Tick{timer_id}).await.is_err() { break }
            }
        });
        debug!("started playback timer {timer_id} with period {period:?}");
        self.timer = Some( th.abort_handle());
    }

    fn cancel_timer (&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
            debug!("cancelled playback timer {}", self.timer_id);
        }
    }

    fn publish (&self) {
        self.frame_tx.send_replace( self.state.frame());
    }
}

/// spawn the player task. The task ends when it receives `Terminate` or all handles are dropped
pub fn spawn_player (state: AppState, client: TrafficClient)->(PlayerHandle, JoinHandle<()>) {
    let (tx, rx) = mpsc::channel( DEFAULT_CHANNEL_BOUND);
    let (frame_tx, frame_rx) = watch::channel( state.frame());

    let player = Player { state, client, hself: tx.downgrade(), rx, frame_tx, timer: None, timer_id: 0 };
    let jh = tokio::spawn( player.run());
    info!("spawned player");

    (PlayerHandle{ tx, frames: frame_rx }, jh)
}

/// the cloneable front of the player
#[derive(Debug,Clone)]
pub struct PlayerHandle {
    tx: mpsc::Sender<PlayerMsg>,
    frames: watch::Receiver<Frame>,
}

impl PlayerHandle {
    pub async fn send (&self, msg: PlayerMsg)->Result<()> {
        self.tx.send( msg).await.map_err(|_| ReplayPlayerError::PlayerClosed("message channel closed".to_string()))
    }

    pub async fn play (&self)->Result<()> { self.send( PlayerMsg::Play).await }
    pub async fn pause (&self)->Result<()> { self.send( PlayerMsg::Pause).await }
    pub async fn toggle (&self)->Result<()> { self.send( PlayerMsg::Toggle).await }
    pub async fn step (&self, dir: Direction)->Result<()> { self.send( PlayerMsg::Step(dir)).await }
    pub async fn seek (&self, idx: i64)->Result<()> { self.send( PlayerMsg::Seek(idx)).await }
    pub async fn begin_scrub (&self)->Result<()> { self.send( PlayerMsg::BeginScrub).await }
    pub async fn end_scrub (&self)->Result<()> { self.send( PlayerMsg::EndScrub).await }

    /// this is checked in the caller so that invalid speeds are reported back
    pub async fn set_speed (&self, speed: f64)->Result<()> {
        if speed.is_finite() && speed > 0.0 {
            self.send( PlayerMsg::SetSpeed(speed)).await
        } else {
            Err( ReplayPlayerError::IllegalArgument( format!("playback speed has to be finite and > 0: {speed}")))
        }
    }

    pub async fn set_events (&self, events: Vec<EventMetadata>)->Result<()> { self.send( PlayerMsg::SetEvents(events)).await }
    pub async fn select_event (&self, url: impl ToString)->Result<()> { self.send( PlayerMsg::SelectEvent(url.to_string())).await }
    pub async fn load_capture (&self, capture: Capture)->Result<()> { self.send( PlayerMsg::LoadCapture(Box::new(capture))).await }

    pub async fn add_route_filter (&self, filter: RouteFilter)->Result<()> { self.send( PlayerMsg::AddRouteFilter(filter)).await }
    pub async fn remove_route_filter (&self, filter: RouteFilter)->Result<()> { self.send( PlayerMsg::RemoveRouteFilter(filter)).await }
    pub async fn clear_route_filters (&self)->Result<()> { self.send( PlayerMsg::ClearRouteFilters).await }
    pub async fn set_hide_slow_aircraft (&self, hide: bool)->Result<()> { self.send( PlayerMsg::SetHideSlowAircraft(hide)).await }
    pub async fn set_labels (&self, labels: LabelConfig)->Result<()> { self.send( PlayerMsg::SetLabels(labels)).await }
    pub async fn set_rings (&self, rings: RingConfig)->Result<()> { self.send( PlayerMsg::SetRings(rings)).await }

    pub async fn terminate (&self)->Result<()> { self.send( PlayerMsg::Terminate).await }

    /// the latest published frame
    pub fn frame (&self)->Frame { self.frames.borrow().clone() }

    /// a receiver that gets notified about each new frame
    pub fn subscribe (&self)->watch::Receiver<Frame> { self.frames.clone() }
}
