//! The task record and its supporting field sets.
//!
//! A [`Task`] is the persisted entity. [`NewTask`] carries the fields
//! accepted at insertion and [`TaskPatch`] the partial field set accepted
//! by an update; absent patch fields leave the stored value untouched.
//! [`StatusFilter`] is the classification used to narrow list queries by
//! the `completed` flag.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::value_objects::TaskId;

/// A persisted task record.
///
/// Invariants maintained by the store and the transport-layer validation:
///
/// - `id` is unique and immutable
/// - `title` is never empty
/// - `created_at` is set once at insertion and never mutated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier, assigned by the store at insertion.
    pub id: TaskId,
    /// Short description of the work. Never empty.
    pub title: String,
    /// Optional free-form detail text.
    pub description: Option<String>,
    /// Whether the task has been completed.
    pub completed: bool,
    /// UTC instant the record was created.
    pub created_at: DateTime<Utc>,
}

/// Field set accepted by the insert primitive.
///
/// The `completed` flag is already defaulted here; callers that omit it on
/// the wire insert `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
}

/// Partial field set accepted by the update primitive.
///
/// `None` fields are left untouched by the merge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
}

/// Error returned when a string is not a recognized status filter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid status filter: {0}")]
pub struct InvalidStatusFilter(pub String);

/// Classification used to narrow a list query by the `completed` flag.
///
/// Parses case-sensitively from the query values `"pending"` and
/// `"completed"`; anything else is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    /// Tasks with `completed == false`.
    Pending,
    /// Tasks with `completed == true`.
    Completed,
}

impl StatusFilter {
    /// Returns the equality-filter value this classification maps to.
    #[must_use]
    pub const fn completed_flag(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl FromStr for StatusFilter {
    type Err = InvalidStatusFilter;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            other => Err(InvalidStatusFilter(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    // =========================================================================
    // StatusFilter Tests
    // =========================================================================

    #[rstest]
    #[case("pending", StatusFilter::Pending)]
    #[case("completed", StatusFilter::Completed)]
    fn status_filter_parses_permitted_values(
        #[case] value: &str,
        #[case] expected: StatusFilter,
    ) {
        assert_eq!(value.parse::<StatusFilter>(), Ok(expected));
    }

    #[rstest]
    #[case("Pending")]
    #[case("COMPLETED")]
    #[case("done")]
    #[case("")]
    #[case("pending ")]
    fn status_filter_rejects_anything_else(#[case] value: &str) {
        let result = value.parse::<StatusFilter>();

        assert_eq!(result, Err(InvalidStatusFilter(value.to_string())));
    }

    #[rstest]
    fn pending_maps_to_completed_false() {
        assert!(!StatusFilter::Pending.completed_flag());
    }

    #[rstest]
    fn completed_maps_to_completed_true() {
        assert!(StatusFilter::Completed.completed_flag());
    }

    // =========================================================================
    // TaskPatch Tests
    // =========================================================================

    #[rstest]
    fn default_patch_touches_nothing() {
        let patch = TaskPatch::default();

        assert_eq!(patch.title, None);
        assert_eq!(patch.description, None);
        assert_eq!(patch.completed, None);
    }
}
