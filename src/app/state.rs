//! Application state container and mutation methods.
//!
//! This module defines [`AppState`], the single owned state container for the
//! engine: the persisted collections (categories, work log), the transient
//! countdown state, and the per-session counters. It is the single source of
//! truth; the event handler mutates it and every render reads from it.
//!
//! # State Components
//!
//! - **Categories**: master list loaded from storage, append-only
//! - **Logs**: today-scoped work log, purged of stale dates on every mutation
//! - **Timer**: the singleton countdown snapshot, idle on fresh load
//! - **Selection**: the confirmed category id, `None` until first confirmation
//! - **Work count**: completed work intervals this session, drives the
//!   long-break cadence, never persisted

use crate::domain::{
    next_category_id, retain_today, PomologError, Result, TimerState, WorkCategory, WorkLog,
};
use crate::storage::PersistedState;

/// Central engine state container.
///
/// Constructed from the loaded [`PersistedState`]; the timer and session
/// counters always start fresh. Mutated only by the event handler in response
/// to user intents and countdown completions — there is exactly one state
/// owner and one event-processing context, so no interleaving of two
/// transitions can occur.
#[derive(Debug, Clone)]
pub struct AppState {
    /// All known work categories, in creation order.
    ///
    /// Append-only: the engine never mutates or deletes a category once
    /// created. Ids are unique for the life of the store.
    pub categories: Vec<WorkCategory>,

    /// Work log entries for today.
    ///
    /// Every mutation path runs the stale-date purge first, so entries dated
    /// other than today never survive a mutation.
    pub logs: Vec<WorkLog>,

    /// Current countdown state. Idle (`Stop`, no target) on fresh load.
    pub timer: TimerState,

    /// Id of the confirmed work category, `None` until the user confirms one.
    ///
    /// When set, always references an existing entry in `categories`.
    pub selected_category_id: Option<i64>,

    /// Completed work intervals since this session started.
    ///
    /// Used only for the long-break cadence (every 4th). Not persisted;
    /// resets when the process restarts.
    pub work_count: u32,
}

impl AppState {
    /// Creates engine state from a loaded persisted document.
    ///
    /// The caller is expected to run the post-load stale purge via
    /// [`AppState::purge_stale`] once it knows today's date (see
    /// [`crate::initialize`]).
    #[must_use]
    pub fn new(persisted: PersistedState) -> Self {
        Self {
            categories: persisted.categories,
            logs: persisted.logs,
            timer: TimerState::idle(),
            selected_category_id: None,
            work_count: 0,
        }
    }

    /// Returns the confirmed category, if any.
    #[must_use]
    pub fn selected_category(&self) -> Option<&WorkCategory> {
        self.selected_category_id
            .and_then(|id| self.categories.iter().find(|c| c.id == id))
    }

    /// Confirms a category by name, creating it if unseen.
    ///
    /// Trims `raw_input`; an exact, case-sensitive match against an existing
    /// name selects that category without creating anything, otherwise a new
    /// category with a freshly allocated id is appended and selected.
    ///
    /// Returns `true` when a new category was created (the caller persists in
    /// that case).
    ///
    /// # Errors
    ///
    /// Returns [`PomologError::Validation`] when the trimmed input is empty.
    /// State is unchanged in that case.
    pub fn confirm_category(&mut self, raw_input: &str) -> Result<bool> {
        let name = raw_input.trim();
        if name.is_empty() {
            return Err(PomologError::Validation(
                "Select a work category, or type a new name to create one.".to_string(),
            ));
        }

        if let Some(existing) = self.categories.iter().find(|c| c.name == name) {
            tracing::debug!(category_id = existing.id, name = %existing.name, "selected existing category");
            self.selected_category_id = Some(existing.id);
            Ok(false)
        } else {
            let id = next_category_id(&self.categories);
            tracing::debug!(category_id = id, name = %name, "created new category");
            self.categories.push(WorkCategory::new(id, name));
            self.selected_category_id = Some(id);
            Ok(true)
        }
    }

    /// Appends a work log entry for `today`, purging stale entries first.
    ///
    /// Returns the number of stale entries removed, so the handler can raise
    /// the purge notice.
    pub fn append_log(&mut self, today: &str, category_id: i64, minutes: f64) -> usize {
        let removed = retain_today(&mut self.logs, today);
        self.logs.push(WorkLog::new(today, category_id, minutes));
        tracing::debug!(category_id, minutes, today, "appended work log entry");
        removed
    }

    /// Drops log entries whose date is not `today`. Returns how many were removed.
    pub fn purge_stale(&mut self, today: &str) -> usize {
        retain_today(&mut self.logs, today)
    }

    /// Resets the countdown to idle.
    pub fn reset_timer(&mut self) {
        self.timer = TimerState::idle();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimerMode;

    fn fresh_state() -> AppState {
        AppState::new(PersistedState::default())
    }

    #[test]
    fn fresh_state_is_idle_with_no_selection() {
        let state = fresh_state();
        assert_eq!(state.timer.mode, TimerMode::Stop);
        assert!(state.selected_category_id.is_none());
        assert_eq!(state.work_count, 0);
        assert!(state.logs.is_empty());
    }

    #[test]
    fn confirm_selects_existing_category_without_creating() {
        let mut state = fresh_state();
        let created = state.confirm_category("Study").unwrap();
        assert!(!created);
        assert_eq!(state.selected_category_id, Some(1));
        assert_eq!(state.categories.len(), 2);
    }

    #[test]
    fn confirm_trims_before_matching() {
        let mut state = fresh_state();
        let created = state.confirm_category("  Development  ").unwrap();
        assert!(!created);
        assert_eq!(state.selected_category_id, Some(2));
    }

    #[test]
    fn confirm_is_case_sensitive() {
        let mut state = fresh_state();
        let created = state.confirm_category("study").unwrap();
        assert!(created, "lowercase name must create a distinct category");
        assert_eq!(state.categories.len(), 3);
    }

    #[test]
    fn confirm_creates_and_selects_unseen_name() {
        let mut state = fresh_state();
        let created = state.confirm_category("Writing").unwrap();
        assert!(created);
        assert_eq!(state.categories.len(), 3);
        assert_eq!(state.selected_category().map(|c| c.name.as_str()), Some("Writing"));
        assert_eq!(state.selected_category_id, Some(3));
    }

    #[test]
    fn confirm_is_idempotent_on_the_category_list() {
        let mut state = fresh_state();
        state.confirm_category("Writing").unwrap();
        let created_again = state.confirm_category("Writing").unwrap();
        assert!(!created_again);
        let count = state.categories.iter().filter(|c| c.name == "Writing").count();
        assert_eq!(count, 1);
    }

    #[test]
    fn confirm_rejects_empty_input_without_state_change() {
        let mut state = fresh_state();
        let before = state.clone();
        let err = state.confirm_category("   ").unwrap_err();
        assert!(matches!(err, PomologError::Validation(_)));
        assert_eq!(state.categories, before.categories);
        assert_eq!(state.selected_category_id, before.selected_category_id);
    }

    #[test]
    fn append_log_purges_stale_entries_first() {
        let mut state = fresh_state();
        state.logs.push(WorkLog::new("2026-08-24", 1, 99.0));
        let removed = state.append_log("2026-08-25", 1, 25.0);
        assert_eq!(removed, 1);
        assert!(state.logs.iter().all(|l| l.date == "2026-08-25"));
        assert_eq!(state.logs.len(), 1);
    }

    #[test]
    fn new_category_ids_never_collide() {
        let mut state = fresh_state();
        state.confirm_category("A").unwrap();
        state.confirm_category("B").unwrap();
        state.confirm_category("C").unwrap();
        let mut ids: Vec<i64> = state.categories.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), state.categories.len());
    }
}
