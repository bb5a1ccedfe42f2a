//! Persisted document model and load/save operations.
//!
//! This module defines [`PersistedState`], the single JSON document the engine
//! keeps in its store slot, together with the load path (which never fails —
//! absent or corrupt content falls back to a deterministic default) and the
//! save path (which rewrites the whole document as one unit).
//!
//! # Document Format
//!
//! ```json
//! {
//!   "categories": [ { "id": 1, "name": "Study" } ],
//!   "logs": [ { "date": "2026-08-25", "categoryId": 1, "minutes": 25.0 } ]
//! }
//! ```

use crate::domain::error::Result;
use crate::domain::{WorkCategory, WorkLog};
use crate::storage::backend::Store;
use serde::{Deserialize, Serialize};

/// Fixed, versioned slot key for the persisted document.
///
/// A future schema change bumps the version suffix instead of migrating the
/// stored value in place; old slots are simply ignored.
pub const STORAGE_KEY: &str = "pomodoro-log-v1";

/// The persisted document: the full category list and work log.
///
/// Always written and read as one unit. `TimerState` and session counters are
/// transient and deliberately excluded; a fresh load always starts idle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedState {
    /// All known work categories, in creation order.
    pub categories: Vec<WorkCategory>,

    /// Work log entries. Today-scoped after the post-load purge.
    #[serde(default)]
    pub logs: Vec<WorkLog>,
}

impl Default for PersistedState {
    /// The deterministic fallback: two seed categories and no logs.
    ///
    /// Used when the slot is absent or its content is corrupt. The seed ids
    /// are stable so logs written against defaults survive later reloads.
    fn default() -> Self {
        Self {
            categories: vec![
                WorkCategory::new(1, "Study"),
                WorkCategory::new(2, "Development"),
            ],
            logs: Vec::new(),
        }
    }
}

/// Borrowing view of the persisted document, for serialization without cloning.
#[derive(Serialize)]
struct PersistedStateRef<'a> {
    categories: &'a [WorkCategory],
    logs: &'a [WorkLog],
}

/// Loads the persisted document from the store slot.
///
/// Never fails: an absent slot, a failed read, or unparsable content all
/// resolve to [`PersistedState::default`]. A corrupt slot is recovered
/// locally and logged at warn level, never surfaced to the user.
#[must_use]
pub fn load_persisted(store: &dyn Store) -> PersistedState {
    let _span = tracing::debug_span!("load_persisted", key = STORAGE_KEY).entered();

    let raw = match store.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("slot absent, using defaults");
            return PersistedState::default();
        }
        Err(e) => {
            tracing::warn!(error = %e, "store read failed, using defaults");
            return PersistedState::default();
        }
    };

    match serde_json::from_str::<PersistedState>(&raw) {
        Ok(state) => {
            tracing::debug!(
                category_count = state.categories.len(),
                log_count = state.logs.len(),
                "persisted state loaded"
            );
            state
        }
        Err(e) => {
            tracing::warn!(error = %e, "persisted state corrupt, using defaults");
            PersistedState::default()
        }
    }
}

/// Serializes `(categories, logs)` and overwrites the store slot.
///
/// # Errors
///
/// Returns an error if serialization or the store write fails. The dispatch
/// layer treats this as best-effort and only logs the failure.
pub fn save_persisted(
    store: &mut dyn Store,
    categories: &[WorkCategory],
    logs: &[WorkLog],
) -> Result<()> {
    let _span = tracing::debug_span!(
        "save_persisted",
        key = STORAGE_KEY,
        category_count = categories.len(),
        log_count = logs.len()
    )
    .entered();

    let json = serde_json::to_string(&PersistedStateRef { categories, logs })
        .map_err(|e| crate::domain::PomologError::Storage(format!("failed to serialize: {e}")))?;

    store.set_item(STORAGE_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn empty_store_loads_seed_categories_and_no_logs() {
        let store = MemoryStore::new();
        let state = load_persisted(&store);
        assert_eq!(state.categories.len(), 2);
        assert_eq!(state.categories[0], WorkCategory::new(1, "Study"));
        assert_eq!(state.categories[1], WorkCategory::new(2, "Development"));
        assert!(state.logs.is_empty());
    }

    #[test]
    fn corrupt_slot_falls_back_to_defaults() {
        let mut store = MemoryStore::new();
        store.set_item(STORAGE_KEY, "{not json at all").unwrap();
        let state = load_persisted(&store);
        assert_eq!(state, PersistedState::default());
    }

    #[test]
    fn save_then_load_round_trips_the_document() {
        let mut store = MemoryStore::new();
        let categories = vec![WorkCategory::new(1, "Study"), WorkCategory::new(9, "Music")];
        let logs = vec![WorkLog::new("2026-08-25", 9, 12.5)];

        save_persisted(&mut store, &categories, &logs).unwrap();
        let state = load_persisted(&store);

        assert_eq!(state.categories, categories);
        assert_eq!(state.logs, logs);
    }

    #[test]
    fn document_uses_camel_case_category_id() {
        let mut store = MemoryStore::new();
        let logs = vec![WorkLog::new("2026-08-25", 1, 25.0)];
        save_persisted(&mut store, &[], &logs).unwrap();

        let raw = store.get_item(STORAGE_KEY).unwrap().unwrap();
        assert!(raw.contains("\"categoryId\":1"));
    }

    #[test]
    fn missing_logs_field_defaults_to_empty() {
        let mut store = MemoryStore::new();
        store
            .set_item(STORAGE_KEY, r#"{"categories":[{"id":1,"name":"Study"}]}"#)
            .unwrap();
        let state = load_persisted(&store);
        assert_eq!(state.categories.len(), 1);
        assert!(state.logs.is_empty());
    }
}
