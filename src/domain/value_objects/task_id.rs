//! Task ID value object.
//!
//! Provides a strongly-typed identifier for task records using UUID v7
//! format. UUID v7 is time-ordered, which keeps primary-key indexes compact
//! and gives identifiers a natural chronological sort.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use uuid::Uuid;

/// Error returned when a string is not a valid task identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid task identifier: {0}")]
pub struct InvalidTaskId(pub String);

/// A unique identifier for a task record.
///
/// `TaskId` wraps a UUID and is assigned by the store when a record is
/// inserted. It never changes for the lifetime of the record.
///
/// # Examples
///
/// ```rust
/// use taskboard::domain::value_objects::TaskId;
///
/// let id = TaskId::generate();
/// let parsed = TaskId::parse(&id.to_string()).unwrap();
/// assert_eq!(id, parsed);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Parses a `TaskId` from its canonical string representation.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTaskId`] when the string is not a valid UUID. The
    /// store layer maps that case to an absent result rather than a failure;
    /// a caller asking for a malformed identifier is asking for a record
    /// that cannot exist.
    pub fn parse(value: &str) -> Result<Self, InvalidTaskId> {
        Uuid::from_str(value)
            .map(Self)
            .map_err(|_| InvalidTaskId(value.to_string()))
    }

    /// Generates a new time-ordered `TaskId`.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    /// Returns the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = InvalidTaskId;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}
