//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user intents
//! and countdown completions, translating them into state changes and action
//! sequences. It is the timer state machine: every legal mode transition lives
//! here, and everything else is a guarded no-op.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the embedding runtime (clicks, countdown signal)
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! # Transitions
//!
//! ```text
//!            start (selection confirmed)
//!   Stop ───────────────────────────────▶ Work
//!    ▲                                     │ │
//!    │ stop (logs elapsed ≥ 0.1 min)       │ │ complete (logs 25 min)
//!    └─────────────────────────────────────┘ ▼
//!                      Break ◀── work_count % 4 != 0
//!                   LongBreak ◀── work_count % 4 == 0
//!                      │
//!                      └── complete ──▶ Work
//! ```
//!
//! Completion signals while idle are absorbed silently: the countdown facility
//! may fire late, after a manual stop already reset the state.

use crate::app::summary::round_decimal;
use crate::app::{Action, AppState, Notice};
use crate::domain::error::Result;
use crate::domain::timer::LONG_BREAK_EVERY;
use crate::domain::{PomologError, TimerMode, TimerState};
use crate::infrastructure::{local_date_string, Clock};

/// Manual stops shorter than this many minutes are discarded, not logged.
pub const MIN_LOG_MINUTES: f64 = 0.1;

/// Logged elapsed minutes are rounded to the nearest multiple of this step.
pub const LOG_ROUND_STEP: f64 = 0.1;

/// Events triggered by user intents or the countdown facility.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The handler processes events sequentially and to
/// completion, ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Confirms the typed or picked category name as the active selection.
    ///
    /// Creates the category first if the trimmed name is unseen.
    ConfirmCategory {
        /// Raw user input; trimmed before matching.
        input: String,
    },

    /// Starts a work interval. Requires a confirmed category.
    StartTimer,

    /// Manually stops the countdown and returns to idle.
    ///
    /// From a running work interval this logs the rounded elapsed minutes,
    /// provided they reach the minimum threshold. Safe to send while idle.
    StopTimer,

    /// The countdown naturally reached its target.
    ///
    /// Sent by the external timer facility. Ignored while idle, since a late
    /// signal can arrive after a manual stop.
    IntervalElapsed,
}

/// Processes an event, mutates engine state, and returns actions to execute.
///
/// This is the primary event handler coordinating all state transitions and
/// side effects. It pattern-matches on event types, calls state mutation
/// methods, and collects actions for [`crate::dispatch`] and the runtime.
///
/// # Parameters
///
/// * `state` - Mutable reference to engine state
/// * `event` - Event to process
/// * `clock` - Wall-clock source for targets, elapsed time, and log dates
///
/// # Returns
///
/// `(render_needed, actions)`. `render_needed` is `false` only for absorbed
/// no-ops (spurious completion or stop while idle), where nothing observable
/// changed.
///
/// # Errors
///
/// [`PomologError::Validation`] for an empty category confirmation and
/// [`PomologError::Precondition`] for a start without a confirmed category.
/// Both leave state untouched; the runtime presents them and carries on.
pub fn handle_event(
    state: &mut AppState,
    event: &Event,
    clock: &dyn Clock,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::ConfirmCategory { input } => {
            let created = state.confirm_category(input)?;
            let actions = if created {
                vec![Action::SaveState]
            } else {
                vec![]
            };
            Ok((true, actions))
        }

        Event::StartTimer => {
            if state.selected_category_id.is_none() {
                return Err(PomologError::Precondition(
                    "Confirm a work category before starting the timer.".to_string(),
                ));
            }

            let mut actions = Vec::new();
            if state.timer.is_running() {
                // Restart: disarm the old countdown before arming the new one.
                actions.push(Action::CancelCompletion);
            }

            let now = clock.now_ms();
            state.timer = TimerState::running(TimerMode::Work, now);
            if let Some(target_ms) = state.timer.target_time_ms {
                actions.push(Action::ScheduleCompletion { target_ms });
            }

            tracing::info!(target_ms = ?state.timer.target_time_ms, "work interval started");
            Ok((true, actions))
        }

        Event::StopTimer => handle_stop(state, clock),

        Event::IntervalElapsed => handle_interval_elapsed(state, clock),
    }
}

/// Manual stop: log elapsed work time past the threshold, then go idle.
fn handle_stop(state: &mut AppState, clock: &dyn Clock) -> Result<(bool, Vec<Action>)> {
    if state.timer.mode == TimerMode::Stop && !state.timer.is_running() {
        tracing::debug!("stop while idle, ignoring");
        return Ok((false, vec![]));
    }

    let mut actions = vec![Action::CancelCompletion];
    let now = clock.now_ms();

    if state.timer.mode == TimerMode::Work {
        if let (Some(target_ms), Some(category_id)) =
            (state.timer.target_time_ms, state.selected_category_id)
        {
            let elapsed_min = elapsed_minutes(state.timer.duration_secs, target_ms, now);
            if elapsed_min >= MIN_LOG_MINUTES {
                let today = local_date_string(now);
                let minutes = round_decimal(elapsed_min, LOG_ROUND_STEP);
                let removed = state.append_log(&today, category_id, minutes);
                if removed > 0 {
                    actions.push(Action::Notify(Notice::StaleLogsPurged { removed }));
                }
                actions.push(Action::SaveState);
                tracing::info!(minutes, category_id, "work interval stopped early, logged");
            } else {
                tracing::debug!(elapsed_min, "elapsed below threshold, discarded");
            }
        }
    }

    state.reset_timer();
    Ok((true, actions))
}

/// Natural completion: log the full work interval, advance the cycle.
fn handle_interval_elapsed(state: &mut AppState, clock: &dyn Clock) -> Result<(bool, Vec<Action>)> {
    match state.timer.mode {
        TimerMode::Stop => {
            tracing::debug!("completion signal while idle, ignoring");
            Ok((false, vec![]))
        }

        TimerMode::Work => {
            let Some(category_id) = state.selected_category_id else {
                tracing::warn!("work interval completed with no selection, ignoring");
                return Ok((false, vec![]));
            };

            let now = clock.now_ms();
            let today = local_date_string(now);
            // The interval ran to completion, so the nominal length is
            // logged as-is rather than recomputed from elapsed time.
            let minutes = f64::from(TimerMode::Work.nominal_secs()) / 60.0;
            let removed = state.append_log(&today, category_id, minutes);

            state.work_count += 1;
            let next_mode = if state.work_count % LONG_BREAK_EVERY == 0 {
                TimerMode::LongBreak
            } else {
                TimerMode::Break
            };
            state.timer = TimerState::running(next_mode, now);

            let mut actions = Vec::new();
            if removed > 0 {
                actions.push(Action::Notify(Notice::StaleLogsPurged { removed }));
            }
            actions.push(Action::SaveState);
            actions.push(Action::StartAlert);
            if let Some(target_ms) = state.timer.target_time_ms {
                actions.push(Action::ScheduleCompletion { target_ms });
            }

            tracing::info!(
                work_count = state.work_count,
                next_mode = ?next_mode,
                "work interval completed"
            );
            Ok((true, actions))
        }

        TimerMode::Break | TimerMode::LongBreak => {
            let now = clock.now_ms();
            state.timer = TimerState::running(TimerMode::Work, now);

            let mut actions = vec![Action::StartAlert];
            if let Some(target_ms) = state.timer.target_time_ms {
                actions.push(Action::ScheduleCompletion { target_ms });
            }

            tracing::info!("break completed, back to work");
            Ok((true, actions))
        }
    }
}

/// Elapsed minutes of a countdown: nominal length minus time remaining.
fn elapsed_minutes(duration_secs: u32, target_ms: i64, now_ms: i64) -> f64 {
    let nominal_min = f64::from(duration_secs) / 60.0;
    #[allow(clippy::cast_precision_loss)]
    let remaining_min = (target_ms - now_ms) as f64 / 60_000.0;
    nominal_min - remaining_min
}
