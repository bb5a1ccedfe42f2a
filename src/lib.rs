//! Pomolog: a Pomodoro timer engine with category-tagged, day-scoped work logging.
//!
//! Pomolog is an embeddable engine that alternates focused work intervals with
//! rest intervals, tags each completed work interval with a user-chosen work
//! category, and accumulates a same-day history of minutes per category:
//! - Countdown state machine: work → break / long break → work, with a long
//!   break every 4th completed work interval
//! - Category confirmation workflow that creates unseen categories on the fly
//! - Append-only work log, strictly scoped to the current local date
//! - Persistent state backed by a single versioned key-value slot (JSON)
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding Runtime (UI, timer facility, alerts)     │  ← Out of scope
//! └─────────────────────────────────────────────────────┘
//!                        │ events            ▲ actions
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action emission                                  │
//! │  - Today-scoped aggregation                         │
//! └─────────────────────────────────────────────────────┘
//!         │                            │
//! ┌───────────────────┐     ┌────────────────────┐
//! │ Storage Layer     │     │ Infrastructure     │
//! │ (storage/)        │     │ (infrastructure/)  │
//! │ - Store trait     │     │ - Clock trait      │
//! │ - JSON file slot  │     │ - Local dates      │
//! │ - Memory backend  │     │ - Platform paths   │
//! └───────────────────┘     └────────────────────┘
//!         │                            │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - WorkCategory, WorkLog, TimerState                │
//! │  - Error taxonomy                                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Control Flow
//!
//! A user intent (confirm category, start, stop) or a countdown-complete
//! signal is dispatched into the engine, which computes the new state,
//! persists the category/log pair, and returns the residual actions the
//! runtime must execute (arm or disarm the countdown, ring the alert, show a
//! notice). The presentation layer then re-renders from the state snapshot.
//! There is exactly one state owner and one event-processing context; every
//! transition runs to completion before the next is handled.
//!
//! # Examples
//!
//! ```
//! use pomolog::{dispatch, initialize, Event};
//! use pomolog::infrastructure::FixedClock;
//! use pomolog::storage::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! let clock = FixedClock::new(1_756_090_800_000);
//!
//! let (mut state, _notices) = initialize(&mut store, &clock);
//!
//! dispatch(
//!     &mut state,
//!     &mut store,
//!     &clock,
//!     &Event::ConfirmCategory { input: "Study".to_string() },
//! )?;
//! let (_, actions) = dispatch(&mut state, &mut store, &clock, &Event::StartTimer)?;
//! assert!(!actions.is_empty()); // ScheduleCompletion for the runtime
//! # Ok::<(), pomolog::domain::PomologError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Best-Effort Persistence
//!
//! The persisted document is small and rewritten whole after every mutation.
//! Writes are fire-and-forget: a failed write is logged at warn level and the
//! session continues — there is no durability guarantee beyond best-effort
//! local storage, and no fatal error path anywhere in the engine.
//!
//! ## Transient Countdown
//!
//! `TimerState` and the session counters are never persisted. A fresh load
//! always starts idle; only the category list and today's log survive a
//! restart.
//!
//! ## Injected Clock
//!
//! The engine's only time dependency is `now()` in epoch milliseconds,
//! injected via the [`Clock`](infrastructure::Clock) trait so transitions are
//! deterministic under test.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;

pub use app::{
    handle_event, round_decimal, today_summary, Action, AppState, CategorySummary, Event, Notice,
};
pub use domain::{PomologError, Result, TimerMode, TimerState, WorkCategory, WorkLog};
pub use infrastructure::{Clock, SystemClock};
pub use storage::{JsonFileStore, MemoryStore, Store};

use crate::infrastructure::local_date_string;
use serde::Deserialize;
use std::path::PathBuf;

/// Engine configuration, loaded from an optional TOML file.
///
/// All fields are optional; the zero-value configuration is fully usable.
///
/// # Example
///
/// ```toml
/// # ~/.config/pomolog/config.toml
/// data_dir = "/home/user/.local/share/pomolog"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for the JSON store slot.
    ///
    /// Default: the platform data directory plus `pomolog`
    /// (see [`infrastructure::data_dir`]).
    pub data_dir: Option<String>,

    /// Tracing filter directive when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Loads configuration from a TOML file.
    ///
    /// A missing file yields the default configuration — the file is
    /// optional.
    ///
    /// # Errors
    ///
    /// Returns [`PomologError::Config`] if the file exists but cannot be
    /// parsed, and [`PomologError::Io`] if it exists but cannot be read.
    ///
    /// # Example
    ///
    /// ```
    /// use pomolog::Config;
    ///
    /// let config = Config::from_file("/nonexistent/config.toml")?;
    /// assert!(config.data_dir.is_none());
    /// # Ok::<(), pomolog::domain::PomologError>(())
    /// ```
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = ?path, "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        toml::from_str(&contents)
            .map_err(|e| PomologError::Config(format!("failed to parse {}: {e}", path.display())))
    }

    /// Loads configuration from the platform default location.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_file`].
    pub fn load() -> Result<Self> {
        Self::from_file(infrastructure::config_file())
    }

    /// Resolves the directory the JSON store should live in.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .as_ref()
            .map_or_else(infrastructure::data_dir, PathBuf::from)
    }
}

/// Initializes the engine from the persisted store.
///
/// Loads the persisted document (falling back to the seed categories and an
/// empty log if the slot is absent or corrupt), purges any work log entries
/// not dated today, and starts with an idle timer and fresh session counters.
///
/// When stale entries were purged, the trimmed document is persisted
/// immediately (best-effort) and a [`Notice::StaleLogsPurged`] action is
/// returned for the runtime to present.
///
/// # Example
///
/// ```
/// use pomolog::{initialize, SystemClock};
/// use pomolog::storage::MemoryStore;
///
/// let mut store = MemoryStore::new();
/// let (state, notices) = initialize(&mut store, &SystemClock);
/// assert_eq!(state.categories.len(), 2); // seed categories
/// assert!(notices.is_empty());
/// ```
pub fn initialize(store: &mut dyn Store, clock: &dyn Clock) -> (AppState, Vec<Action>) {
    tracing::debug!("initializing pomolog engine");

    let persisted = storage::load_persisted(store);
    let mut state = AppState::new(persisted);

    let today = local_date_string(clock.now_ms());
    let removed = state.purge_stale(&today);

    let mut actions = Vec::new();
    if removed > 0 {
        persist_best_effort(&state, store);
        actions.push(Action::Notify(Notice::StaleLogsPurged { removed }));
    }

    tracing::info!(
        category_count = state.categories.len(),
        log_count = state.logs.len(),
        "engine initialized"
    );
    (state, actions)
}

/// Dispatches an event into the engine and executes its persistence.
///
/// Runs [`handle_event`], then executes any [`Action::SaveState`] against the
/// store (best-effort: a failed write is logged and swallowed). The remaining
/// actions — countdown scheduling, alerts, notices — are returned for the
/// runtime to execute in order.
///
/// # Returns
///
/// `(render_needed, actions)` as from [`handle_event`], minus the executed
/// persistence actions.
///
/// # Errors
///
/// Propagates [`PomologError::Validation`] and [`PomologError::Precondition`]
/// from the handler. Both leave state unchanged; present them and carry on.
pub fn dispatch(
    state: &mut AppState,
    store: &mut dyn Store,
    clock: &dyn Clock,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let (render, actions) = handle_event(state, event, clock)?;

    let mut residual = Vec::with_capacity(actions.len());
    for action in actions {
        if action == Action::SaveState {
            persist_best_effort(state, store);
        } else {
            residual.push(action);
        }
    }

    Ok((render, residual))
}

/// Writes the category/log pair to the store, logging failures instead of
/// propagating them.
fn persist_best_effort(state: &AppState, store: &mut dyn Store) {
    if let Err(e) = storage::save_persisted(store, &state.categories, &state.logs) {
        tracing::warn!(error = %e, "failed to persist state, continuing");
    }
}
