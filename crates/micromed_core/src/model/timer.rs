//! Countdown timer model.
//!
//! # Responsibility
//! - Define the start/stop/tick state machine of one meditation countdown.
//! - Render remaining seconds as `MM:SS` display text.
//!
//! # Invariants
//! - `remaining_seconds` never goes below zero.
//! - A tick that leaves `remaining_seconds == 0` forces `running = false`.
//! - `toggle()` flips the running flag regardless of the remaining value.

use serde::{Deserialize, Serialize};

/// Default countdown length for a fresh meditation screen (3 minutes).
pub const DEFAULT_SESSION_SECONDS: u32 = 180;

/// Coarse lifecycle phase derived from [`TimerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    Stopped,
    Running,
}

/// Observable countdown snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Seconds left on the countdown.
    pub remaining_seconds: u32,
    /// Whether the tick loop should keep decrementing.
    pub running: bool,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::stopped(DEFAULT_SESSION_SECONDS)
    }
}

impl TimerState {
    /// Creates a stopped timer with the given remaining seconds.
    pub fn stopped(remaining_seconds: u32) -> Self {
        Self {
            remaining_seconds,
            running: false,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        if self.running {
            TimerPhase::Running
        } else {
            TimerPhase::Stopped
        }
    }

    /// Flips `Stopped <-> Running`.
    ///
    /// Toggling at zero enters `Running`; the tick loop stops it again via
    /// [`TimerState::settle`] without consuming a tick.
    pub fn toggle(&mut self) {
        self.running = !self.running;
    }

    /// Applies one one-second decrement step.
    ///
    /// Returns `true` when the step changed the state. Ticks while stopped
    /// are ignored.
    pub fn tick(&mut self) -> bool {
        if !self.running {
            return false;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.running = false;
        }
        true
    }

    /// Whether the tick loop should schedule another step.
    pub fn wants_tick(&self) -> bool {
        self.running && self.remaining_seconds > 0
    }

    /// Forces `Stopped` when running with nothing left to count.
    ///
    /// Returns `true` when the timer was stopped by this call.
    pub fn settle(&mut self) -> bool {
        if self.running && self.remaining_seconds == 0 {
            self.running = false;
            return true;
        }
        false
    }

    /// Returns `MM:SS` display text for the remaining seconds.
    pub fn display(&self) -> String {
        format_time(self.remaining_seconds)
    }
}

/// Formats seconds as zero-padded `MM:SS`.
///
/// Minutes are not wrapped into hours, so `3600` renders as `60:00`.
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
