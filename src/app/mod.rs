//! Application layer coordinating state, events, and actions.
//!
//! This module defines the core engine logic layer, sitting between the
//! embedding runtime and the domain/storage layers. It implements the
//! event-driven update loop that powers the timer.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Intent → Events → Event Handler → State Mutations → Actions → Side Effects
//!                            ↑                                  ↓
//!                            └──── Countdown Completion ────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and the timer state machine
//! - [`state`]: Central engine state container
//! - [`summary`]: Today-scoped aggregation and decimal rounding
//!
//! # Example
//!
//! ```
//! use pomolog::app::{handle_event, AppState, Event};
//! use pomolog::infrastructure::FixedClock;
//! use pomolog::storage::PersistedState;
//!
//! let mut state = AppState::new(PersistedState::default());
//! let clock = FixedClock::new(1_756_090_800_000);
//! let (render, _actions) = handle_event(
//!     &mut state,
//!     &Event::ConfirmCategory { input: "Study".to_string() },
//!     &clock,
//! )?;
//! assert!(render);
//! # Ok::<(), pomolog::domain::PomologError>(())
//! ```

pub mod actions;
pub mod handler;
pub mod state;
pub mod summary;

pub use actions::{Action, Notice};
pub use handler::{handle_event, Event, LOG_ROUND_STEP, MIN_LOG_MINUTES};
pub use state::AppState;
pub use summary::{round_decimal, today_summary, CategorySummary, SUMMARY_ROUND_STEP};
