//! Today-scoped aggregation of the work log.
//!
//! Pure, side-effect-free reads: summing logged minutes per category for the
//! current day, and the decimal rounding rule shared by logging and display.

use crate::domain::{WorkCategory, WorkLog};
use serde::Serialize;
use std::collections::HashMap;

/// The rounding step used when presenting summed minutes.
pub const SUMMARY_ROUND_STEP: f64 = 0.1;

/// One line of the today summary: a category and its summed minutes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Display name of the category.
    pub category_name: String,

    /// Minutes logged under the category today. Raw sum; presenters apply
    /// [`round_decimal`] with [`SUMMARY_ROUND_STEP`] as the final step.
    pub minutes: f64,
}

/// Rounds `value` to the nearest multiple of `step`.
///
/// Uses round-half-away-from-zero on `value / step`, then rescales, computed
/// as `(value * (1/step)).round() / (1/step)`. `f64::round` is
/// half-away-from-zero, and the single multiply/divide pair avoids compounding
/// drift across repeated small increments.
///
/// # Examples
///
/// ```
/// use pomolog::app::round_decimal;
///
/// assert_eq!(round_decimal(12.34, 0.1), 12.3);
/// assert_eq!(round_decimal(12.35, 0.1), 12.4);
/// assert_eq!(round_decimal(0.04, 0.1), 0.0);
/// ```
#[must_use]
pub fn round_decimal(value: f64, step: f64) -> f64 {
    let scale = 1.0 / step;
    (value * scale).round() / scale
}

/// Sums today's logged minutes per category.
///
/// Filters `logs` to entries dated `today`, sums minutes grouped by category
/// id, and maps each category — in category-list order — to its sum. Only
/// categories with a strictly positive sum appear in the result.
///
/// This is a pure read; it neither purges stale entries nor persists.
///
/// # Examples
///
/// ```
/// use pomolog::app::today_summary;
/// use pomolog::domain::{WorkCategory, WorkLog};
///
/// let categories = vec![WorkCategory::new(1, "Study"), WorkCategory::new(2, "Dev")];
/// let logs = vec![
///     WorkLog::new("2026-08-25", 1, 10.0),
///     WorkLog::new("2026-08-25", 1, 5.0),
/// ];
/// let summary = today_summary(&categories, &logs, "2026-08-25");
/// assert_eq!(summary.len(), 1);
/// assert_eq!(summary[0].category_name, "Study");
/// assert_eq!(summary[0].minutes, 15.0);
/// ```
#[must_use]
pub fn today_summary(
    categories: &[WorkCategory],
    logs: &[WorkLog],
    today: &str,
) -> Vec<CategorySummary> {
    let mut minutes_by_id: HashMap<i64, f64> = HashMap::new();
    for log in logs.iter().filter(|log| log.date == today) {
        *minutes_by_id.entry(log.category_id).or_insert(0.0) += log.minutes;
    }

    categories
        .iter()
        .map(|category| CategorySummary {
            category_name: category.name.clone(),
            minutes: minutes_by_id.get(&category.id).copied().unwrap_or(0.0),
        })
        .filter(|item| item.minutes > 0.0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_up_at_one_decimal() {
        assert_eq!(round_decimal(12.34, 0.1), 12.3);
        assert_eq!(round_decimal(12.35, 0.1), 12.4);
        assert_eq!(round_decimal(0.04, 0.1), 0.0);
    }

    #[test]
    fn rounds_half_away_from_zero_for_negatives() {
        assert_eq!(round_decimal(-12.35, 0.1), -12.4);
    }

    #[test]
    fn whole_step_rounding_works_too() {
        assert_eq!(round_decimal(12.5, 1.0), 13.0);
        assert_eq!(round_decimal(12.4, 1.0), 12.0);
    }

    #[test]
    fn summary_excludes_other_days_and_zero_categories() {
        let categories = vec![WorkCategory::new(1, "Study"), WorkCategory::new(2, "Dev")];
        let logs = vec![
            WorkLog::new("2026-08-25", 1, 10.0),
            WorkLog::new("2026-08-25", 1, 5.0),
            WorkLog::new("2026-08-24", 1, 99.0),
        ];

        let summary = today_summary(&categories, &logs, "2026-08-25");
        assert_eq!(
            summary,
            vec![CategorySummary {
                category_name: "Study".to_string(),
                minutes: 15.0
            }]
        );
    }

    #[test]
    fn summary_preserves_category_list_order() {
        let categories = vec![
            WorkCategory::new(5, "Later"),
            WorkCategory::new(1, "Earlier"),
        ];
        let logs = vec![
            WorkLog::new("2026-08-25", 1, 1.0),
            WorkLog::new("2026-08-25", 5, 2.0),
        ];

        let summary = today_summary(&categories, &logs, "2026-08-25");
        let names: Vec<&str> = summary.iter().map(|s| s.category_name.as_str()).collect();
        assert_eq!(names, vec!["Later", "Earlier"]);
    }

    #[test]
    fn summary_of_empty_log_is_empty() {
        let categories = vec![WorkCategory::new(1, "Study")];
        assert!(today_summary(&categories, &[], "2026-08-25").is_empty());
    }

    #[test]
    fn logs_for_unknown_categories_are_not_reported() {
        // Can't happen through the engine, but the read stays total anyway.
        let categories = vec![WorkCategory::new(1, "Study")];
        let logs = vec![WorkLog::new("2026-08-25", 42, 7.0)];
        assert!(today_summary(&categories, &logs, "2026-08-25").is_empty());
    }
}
