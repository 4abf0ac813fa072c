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
use serde::{Serialize,Deserialize};
use replay_common::{clamp_index, datetime::playback_period};
use crate::errors::{Result, ReplayPlayerError};

/// 1x is one snapshot per second
pub const DEFAULT_SPEED: f64 = 1.0;

#[derive(Debug,Clone,Copy,PartialEq,Eq,Default,Serialize,Deserialize)]
pub enum PlaybackState {
    #[default]
    Stopped,
    Playing,
}

#[derive(Debug,Clone,Copy,PartialEq,Eq,Serialize,Deserialize)]
pub enum Direction {
    Forward,
    Backward,
}

/// what the owner of the playback timer has to do after a state change
#[derive(Debug,Clone,Copy,PartialEq,Eq)]
pub enum TimerCommand {
    /// leave the timer as it is (running or not)
    Keep,
    /// replace whatever timer is running with one of the given period
    Start(Duration),
    /// abort the running timer
    Cancel,
}

/// the playback cursor over the timestamps of a capture. This is a pure state machine - it does not own
/// a timer but tells its owner how the timer has to change with each operation.
/// All operations are no-ops on an empty capture
#[derive(Debug,Clone,PartialEq)]
pub struct Playback {
    index: usize,
    len: usize,
    state: PlaybackState,
    speed: f64,
    period: Duration,
    scrub_suspended: bool, // playback was paused by begin_scrub and resumes on end_scrub
}

impl Default for Playback {
    fn default ()->Self { Playback::new(0) }
}

impl Playback {
    pub fn new (len: usize)->Self {
        Playback {
            index: 0,
            len,
            state: PlaybackState::Stopped,
            speed: DEFAULT_SPEED,
            period: Duration::from_secs(1),
            scrub_suspended: false
        }
    }

    pub fn with_speed (len: usize, speed: f64)->Result<Self> {
        let mut playback = Playback::new(len);
        playback.set_speed( speed)?;
        Ok(playback)
    }

    pub fn index (&self)->usize { self.index }
    pub fn len (&self)->usize { self.len }
    pub fn is_empty (&self)->bool { self.len == 0 }
    pub fn state (&self)->PlaybackState { self.state }
    pub fn is_playing (&self)->bool { self.state == PlaybackState::Playing }
    pub fn speed (&self)->f64 { self.speed }

    /// the tick period for the current speed
    pub fn period (&self)->Duration { self.period }

    fn last (&self)->usize { self.len.saturating_sub(1) }

    pub fn play (&mut self)->TimerCommand {
        if self.len == 0 || self.is_playing() {
            TimerCommand::Keep
        } else if self.index >= self.last() { // nothing left to play
            self.state = PlaybackState::Stopped;
            TimerCommand::Keep
        } else {
            self.state = PlaybackState::Playing;
            TimerCommand::Start( self.period)
        }
    }

    pub fn pause (&mut self)->TimerCommand {
        self.scrub_suspended = false;
        if self.is_playing() {
            self.state = PlaybackState::Stopped;
            TimerCommand::Cancel
        } else {
            TimerCommand::Keep
        }
    }

    pub fn toggle (&mut self)->TimerCommand {
        if self.is_playing() { self.pause() } else { self.play() }
    }

    /// advance by one snapshot. Reaching the end stops playback with the next tick
    pub fn tick (&mut self)->TimerCommand {
        if !self.is_playing() {
            return TimerCommand::Keep
        }

        let next = (self.index + 1).min( self.last());
        if next == self.index {
            self.state = PlaybackState::Stopped;
            TimerCommand::Cancel
        } else {
            self.index = next;
            TimerCommand::Keep
        }
    }

    /// move to an arbitrary (clamped) index without changing the playback state
    pub fn seek (&mut self, idx: i64)->TimerCommand {
        self.index = clamp_index( idx, self.len);
        TimerCommand::Keep
    }

    /// start of a direct manipulation (e.g. slider drag). Suspends playback until `end_scrub`
    pub fn begin_scrub (&mut self)->TimerCommand {
        if self.is_playing() {
            self.state = PlaybackState::Stopped;
            self.scrub_suspended = true;
            TimerCommand::Cancel
        } else {
            TimerCommand::Keep
        }
    }

    pub fn end_scrub (&mut self)->TimerCommand {
        if self.scrub_suspended {
            self.scrub_suspended = false;
            self.play()
        } else {
            TimerCommand::Keep
        }
    }

    pub fn is_scrubbing (&self)->bool { self.scrub_suspended }

    /// single step, which always pauses playback first. Stepping beyond either end does nothing
    pub fn step (&mut self, dir: Direction)->TimerCommand {
        let cmd = self.pause();
        if self.len > 0 {
            match dir {
                Direction::Forward => if self.index < self.last() { self.index += 1 }
                Direction::Backward => if self.index > 0 { self.index -= 1 }
            }
        }
        cmd
    }

    pub fn set_speed (&mut self, speed: f64)->Result<TimerCommand> {
        let period = playback_period( speed)
            .ok_or_else(|| ReplayPlayerError::IllegalArgument( format!("playback speed has to be finite and > 0: {speed}")))?;
        self.speed = speed;
        self.period = period;

        if self.is_playing() { Ok( TimerCommand::Start(period)) } else { Ok( TimerCommand::Keep) }
    }

    /// a new capture was loaded. Keeps the speed
    pub fn reset (&mut self, len: usize)->TimerCommand {
        self.len = len;
        self.index = 0;
        self.state = PlaybackState::Stopped;
        self.scrub_suspended = false;
        TimerCommand::Cancel
    }
}
