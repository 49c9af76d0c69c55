//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// Task identifiers are assigned by storage and are always positive.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(i64),

    /// A stored completion flag held something other than 0 or 1.
    #[error("invalid stored completion flag {0}, expected 0 or 1")]
    InvalidCompletionFlag(i16),

    /// Every task identifier has already been assigned.
    #[error("task identifiers exhausted after {last_assigned}")]
    TaskIdsExhausted {
        /// The highest identifier handed out so far.
        last_assigned: i64,
    },
}
