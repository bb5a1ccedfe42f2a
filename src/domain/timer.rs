//! Timer mode and countdown state.
//!
//! This module defines the countdown state machine's data: [`TimerMode`], the
//! four modes the engine cycles through, and [`TimerState`], the singleton
//! countdown snapshot (mode, nominal duration, absolute target timestamp).
//! Transitions between modes live in the application layer
//! ([`crate::app::handle_event`]); this module only knows the shapes and the
//! nominal interval lengths.

use serde::{Deserialize, Serialize};

/// Nominal work interval length: 25 minutes.
pub const WORK_SECS: u32 = 25 * 60;

/// Nominal short break length: 5 minutes.
pub const BREAK_SECS: u32 = 5 * 60;

/// Nominal long break length: 15 minutes.
pub const LONG_BREAK_SECS: u32 = 15 * 60;

/// Every Nth completed work interval is followed by a long break.
pub const LONG_BREAK_EVERY: u32 = 4;

/// The mode the timer is currently in.
///
/// `Stop` is the idle mode: it is both the initial state and the target of
/// every manual stop. The serialized names match the persisted-store dialect
/// (`work`, `break`, `longBreak`, `stop`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimerMode {
    /// A focused work interval. Completing one appends a work log entry.
    #[serde(rename = "work")]
    Work,

    /// A short rest interval between work intervals.
    #[serde(rename = "break")]
    Break,

    /// A longer rest interval, every [`LONG_BREAK_EVERY`]th completed work interval.
    #[serde(rename = "longBreak")]
    LongBreak,

    /// Idle. No countdown is pending; `duration` is 0 and no target is set.
    #[serde(rename = "stop")]
    Stop,
}

impl TimerMode {
    /// Returns the nominal length of this mode in seconds.
    ///
    /// `Stop` has no countdown and always reports 0.
    #[must_use]
    pub const fn nominal_secs(self) -> u32 {
        match self {
            Self::Work => WORK_SECS,
            Self::Break => BREAK_SECS,
            Self::LongBreak => LONG_BREAK_SECS,
            Self::Stop => 0,
        }
    }
}

/// The countdown state. Exactly one exists per engine.
///
/// Invariant: `mode == Stop` implies `duration_secs == 0` and
/// `target_time_ms.is_none()`. Both constructors uphold this; nothing else
/// writes the fields directly from outside the application layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Current mode.
    pub mode: TimerMode,

    /// Nominal length of the current mode in seconds (0 while idle).
    pub duration_secs: u32,

    /// Absolute completion timestamp in epoch milliseconds, absent while idle.
    pub target_time_ms: Option<i64>,
}

impl TimerState {
    /// Returns the idle state: `Stop`, zero duration, no target.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            mode: TimerMode::Stop,
            duration_secs: 0,
            target_time_ms: None,
        }
    }

    /// Returns a running state for `mode`, counting down from `now_ms`.
    ///
    /// The duration is the mode's nominal length and the target is
    /// `now_ms + duration`. Calling this for `Stop` yields the idle state,
    /// since its nominal length is 0 — but use [`TimerState::idle`] for that.
    #[must_use]
    pub fn running(mode: TimerMode, now_ms: i64) -> Self {
        let duration_secs = mode.nominal_secs();
        let target_time_ms = if mode == TimerMode::Stop {
            None
        } else {
            Some(now_ms + i64::from(duration_secs) * 1000)
        };
        Self {
            mode,
            duration_secs,
            target_time_ms,
        }
    }

    /// Milliseconds until the target, clamped at 0. `None` while idle.
    #[must_use]
    pub fn remaining_ms(&self, now_ms: i64) -> Option<i64> {
        self.target_time_ms.map(|target| (target - now_ms).max(0))
    }

    /// True when a countdown is pending.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.target_time_ms.is_some()
    }
}

impl Default for TimerState {
    fn default() -> Self {
        Self::idle()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_has_no_target_and_zero_duration() {
        let state = TimerState::idle();
        assert_eq!(state.mode, TimerMode::Stop);
        assert_eq!(state.duration_secs, 0);
        assert!(state.target_time_ms.is_none());
        assert!(!state.is_running());
    }

    #[test]
    fn running_work_targets_nominal_length_from_now() {
        let state = TimerState::running(TimerMode::Work, 1_000_000);
        assert_eq!(state.mode, TimerMode::Work);
        assert_eq!(state.duration_secs, WORK_SECS);
        assert_eq!(state.target_time_ms, Some(1_000_000 + 25 * 60 * 1000));
    }

    #[test]
    fn remaining_clamps_at_zero_after_target() {
        let state = TimerState::running(TimerMode::Break, 0);
        let past_target = i64::from(BREAK_SECS) * 1000 + 5_000;
        assert_eq!(state.remaining_ms(past_target), Some(0));
    }

    #[test]
    fn mode_serializes_with_store_dialect_names() {
        let json = serde_json::to_string(&TimerMode::LongBreak).unwrap();
        assert_eq!(json, "\"longBreak\"");
    }
}
