//! Work log domain model and today-scoped retention.
//!
//! This module defines [`WorkLog`], the record of minutes spent under one
//! category on one calendar day, plus the retention helper that enforces the
//! engine's central invariant: only entries dated today are ever kept. Stale
//! entries are purged, not archived.

use serde::{Deserialize, Serialize};

/// A record of minutes spent under one category on one calendar day.
///
/// Entries are append-only from the engine's perspective: they are created when
/// a work interval completes (or is manually stopped past the minimum
/// threshold) and never edited in place. An entry whose `date` is not the
/// current local date violates the retention invariant and is dropped on load
/// and on every log mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkLog {
    /// Local calendar date in `YYYY-MM-DD` form.
    pub date: String,

    /// Id of the [`WorkCategory`](crate::domain::WorkCategory) this time was
    /// spent under. Must reference an existing category.
    #[serde(rename = "categoryId")]
    pub category_id: i64,

    /// Minutes spent, always >= 0. Full intervals log the nominal work length;
    /// manual stops log rounded elapsed time.
    pub minutes: f64,
}

impl WorkLog {
    /// Creates a new work log entry.
    #[must_use]
    pub fn new(date: impl Into<String>, category_id: i64, minutes: f64) -> Self {
        Self {
            date: date.into(),
            category_id,
            minutes,
        }
    }
}

/// Drops every entry whose date is not `today`, returning how many were removed.
///
/// This is the stale-date purge invariant: called as a side effect of load and
/// of every log mutation, never skipped. The removal count feeds the
/// user-visible purge notice.
///
/// # Examples
///
/// ```
/// use pomolog::domain::{retain_today, WorkLog};
///
/// let mut logs = vec![
///     WorkLog::new("2026-08-25", 1, 25.0),
///     WorkLog::new("2026-08-24", 1, 99.0),
/// ];
/// let removed = retain_today(&mut logs, "2026-08-25");
/// assert_eq!(removed, 1);
/// assert_eq!(logs.len(), 1);
/// ```
pub fn retain_today(logs: &mut Vec<WorkLog>, today: &str) -> usize {
    let before = logs.len();
    logs.retain(|log| log.date == today);
    let removed = before - logs.len();
    if removed > 0 {
        tracing::debug!(removed, today, "purged stale work log entries");
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retain_today_keeps_matching_entries() {
        let mut logs = vec![
            WorkLog::new("2026-08-25", 1, 10.0),
            WorkLog::new("2026-08-25", 2, 5.0),
        ];
        assert_eq!(retain_today(&mut logs, "2026-08-25"), 0);
        assert_eq!(logs.len(), 2);
    }

    #[test]
    fn retain_today_drops_every_stale_entry() {
        let mut logs = vec![
            WorkLog::new("2026-08-23", 1, 1.0),
            WorkLog::new("2026-08-25", 1, 2.0),
            WorkLog::new("2026-08-24", 2, 3.0),
        ];
        assert_eq!(retain_today(&mut logs, "2026-08-25"), 2);
        assert_eq!(logs, vec![WorkLog::new("2026-08-25", 1, 2.0)]);
    }

    #[test]
    fn retain_today_on_empty_list_is_a_no_op() {
        let mut logs: Vec<WorkLog> = vec![];
        assert_eq!(retain_today(&mut logs, "2026-08-25"), 0);
    }
}
