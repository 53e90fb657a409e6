/*
timer.rs

Copyright 2025 The Boggle Authors

This file is part of Boggle.

Boggle is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Boggle is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Boggle. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Countdown clock of a game.
//!
//! The remaining time is always computed from the deadline, never by counting ticks, so that a
//! late timer callback does not make the clock drift.
//! All the methods receive the current time so that the caller (and the tests) decide what "now"
//! is.

use std::time::{Duration, Instant};
use strum_macros::Display;

use crate::config::{CRITICAL_TIME_SEC, LOW_TIME_SEC};

/// How urgent the remaining time is. The value is used as a CSS class for the clock label.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Display)]
pub enum TimeLevel {
    #[strum(serialize = "time-normal")]
    Normal,

    /// At most [`LOW_TIME_SEC`] seconds.
    #[strum(serialize = "time-low")]
    Low,

    /// At most [`CRITICAL_TIME_SEC`] seconds.
    #[strum(serialize = "time-critical")]
    Critical,

    #[strum(serialize = "time-expired")]
    Expired,
}

impl TimeLevel {
    /// Return the level for the given number of remaining seconds.
    pub fn from_secs(remaining_secs: u64) -> Self {
        if remaining_secs == 0 {
            TimeLevel::Expired
        } else if remaining_secs <= CRITICAL_TIME_SEC {
            TimeLevel::Critical
        } else if remaining_secs <= LOW_TIME_SEC {
            TimeLevel::Low
        } else {
            TimeLevel::Normal
        }
    }
}

/// Split a number of seconds into minutes and seconds.
pub fn minutes_seconds(total_secs: u64) -> (u64, u64) {
    (total_secs / 60, total_secs % 60)
}

/// Clock that counts down to a deadline.
#[derive(Debug, Clone)]
pub struct SessionClock {
    /// When the time is up.
    deadline: Instant,

    /// The remaining time when the player paused the game.
    paused_remaining: Option<Duration>,
}

impl SessionClock {
    /// Create a [`SessionClock`] object that expires `duration` after `now`.
    pub fn start(duration: Duration, now: Instant) -> Self {
        Self {
            deadline: now + duration,
            paused_remaining: None,
        }
    }

    /// Return the remaining time. A paused clock does not move.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.paused_remaining {
            Some(r) => r,
            None => self.deadline.saturating_duration_since(now),
        }
    }

    /// Return the remaining time in seconds, rounded up.
    ///
    /// Rounding up ensures that zero is only returned when the time is really up.
    pub fn remaining_secs(&self, now: Instant) -> u64 {
        let remaining: Duration = self.remaining(now);
        let secs: u64 = remaining.as_secs();
        if remaining.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }

    /// Whether the deadline has passed.
    pub fn is_expired(&self, now: Instant) -> bool {
        self.remaining(now).is_zero()
    }

    pub fn is_paused(&self) -> bool {
        self.paused_remaining.is_some()
    }

    /// Freeze the clock.
    pub fn pause(&mut self, now: Instant) {
        if self.paused_remaining.is_none() {
            self.paused_remaining = Some(self.deadline.saturating_duration_since(now));
        }
    }

    /// Restart the clock with the time that was remaining when it was paused.
    pub fn resume(&mut self, now: Instant) {
        if let Some(r) = self.paused_remaining.take() {
            self.deadline = now + r;
        }
    }
}
