//! Work category domain model.
//!
//! This module defines [`WorkCategory`], the user-chosen label attached to each
//! completed work interval. Categories are created on first confirmation of an
//! unseen name and are never mutated or deleted by the engine afterwards.

use serde::{Deserialize, Serialize};

/// A user-defined label for the kind of work being timed.
///
/// Categories live for the life of the persisted store. The `id` is unique and
/// immutable once assigned; the `name` is trimmed and non-empty. Name matching
/// during confirmation is exact and case-sensitive, so names are practically
/// unique as well.
///
/// # Examples
///
/// ```
/// use pomolog::domain::WorkCategory;
///
/// let category = WorkCategory::new(3, "Writing");
/// assert_eq!(category.id, 3);
/// assert_eq!(category.name, "Writing");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCategory {
    /// Unique, immutable storage identifier.
    pub id: i64,

    /// Trimmed, non-empty display name.
    pub name: String,
}

impl WorkCategory {
    /// Creates a new category with the given id and name.
    ///
    /// The caller is responsible for id uniqueness; the engine allocates ids via
    /// [`next_category_id`].
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Allocates the next category id for a category list.
///
/// Returns one past the highest existing id, starting at 1 for an empty list.
/// Monotonic and collision-free: categories are never deleted, so the maximum
/// id only ever grows.
///
/// # Examples
///
/// ```
/// use pomolog::domain::{next_category_id, WorkCategory};
///
/// let categories = vec![WorkCategory::new(1, "Study"), WorkCategory::new(7, "Dev")];
/// assert_eq!(next_category_id(&categories), 8);
/// assert_eq!(next_category_id(&[]), 1);
/// ```
#[must_use]
pub fn next_category_id(categories: &[WorkCategory]) -> i64 {
    categories
        .iter()
        .map(|c| c.id)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_id_is_one_for_empty_list() {
        assert_eq!(next_category_id(&[]), 1);
    }

    #[test]
    fn next_id_skips_past_gaps() {
        let categories = vec![
            WorkCategory::new(1, "Study"),
            WorkCategory::new(1_700_000_000_000, "Imported"),
        ];
        assert_eq!(next_category_id(&categories), 1_700_000_000_001);
    }
}
