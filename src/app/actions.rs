//! Actions representing side effects to be executed by the embedding runtime.
//!
//! This module defines the [`Action`] type, which represents imperative commands
//! produced by the event handler after processing a user intent or a countdown
//! completion. Actions bridge pure state transformations and effectful
//! operations like persisting the store slot, arming the external countdown
//! facility, or presenting a message to the user.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event,
//! allowing multiple side effects to be queued atomically. [`crate::dispatch`]
//! executes [`Action::SaveState`] itself (persistence is the engine's
//! responsibility) and hands the remaining actions to the runtime in order.

use serde::Serialize;

/// Commands representing side effects to be executed after an event.
///
/// Actions are produced by the event handler. They represent the boundary
/// between pure state transformations and effectful operations like storage
/// writes and countdown scheduling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Action {
    /// Persists the current category list and work log to the store slot.
    ///
    /// Emitted after every mutation of either collection. Executed by
    /// [`crate::dispatch`] as a best-effort, fire-and-forget write.
    SaveState,

    /// Arms the external countdown facility to fire
    /// [`Event::IntervalElapsed`](crate::app::Event) at `target_ms`.
    ///
    /// Emitted whenever a new interval begins. The runtime may implement this
    /// as a one-shot timer or by polling the target against its clock.
    ScheduleCompletion {
        /// Absolute completion timestamp in epoch milliseconds.
        target_ms: i64,
    },

    /// Disarms any pending countdown completion.
    ///
    /// Emitted on manual stop, and on restart before the replacement
    /// [`Action::ScheduleCompletion`]. Safe to execute when nothing is armed.
    CancelCompletion,

    /// Starts the completion alert (sound, flash — runtime's choice).
    ///
    /// Emitted on every natural interval completion. Silencing on the next
    /// user input is the runtime's concern; hosts without an alert surface
    /// treat this as a no-op.
    StartAlert,

    /// Presents an informational notice to the user.
    Notify(Notice),
}

/// User-visible notices that are informational, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// Work log entries from previous days were purged.
    ///
    /// Raised whenever the today-only retention invariant drops entries, so
    /// the user learns that past days are not archived.
    StaleLogsPurged {
        /// Number of entries removed.
        removed: usize,
    },
}
