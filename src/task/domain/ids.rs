//! Identifier type for stored task records.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Storage-assigned identifier of a task record.
///
/// Identifiers are positive and never reused once a record is deleted. The
/// value `0` used by the HTML forms to mean "new record" is not a `TaskId`;
/// callers model it as `Option<TaskId>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Creates a validated task identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTaskId`] when the value is zero or
    /// negative.
    pub const fn new(value: i64) -> Result<Self, TaskDomainError> {
        if value <= 0 {
            return Err(TaskDomainError::InvalidTaskId(value));
        }
        Ok(Self(value))
    }

    /// Parses a URL path segment.
    ///
    /// Anything other than a positive decimal integer yields `None`, which
    /// the workflow treats the same as id `0`.
    #[must_use]
    pub fn from_path_segment(segment: &str) -> Option<Self> {
        segment
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|value| Self::new(value).ok())
    }

    /// Returns the underlying numeric value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
