//! Storage encoding of the task completion flag.

use super::TaskDomainError;

/// Mapping between the domain completion boolean and its stored integer.
///
/// Storage holds `0` or `1`; every adapter converts through these functions
/// in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionFlag;

impl CompletionFlag {
    /// Stored value of an incomplete task.
    pub const INCOMPLETE: i16 = 0;

    /// Stored value of a completed task.
    pub const COMPLETE: i16 = 1;

    /// Encodes the domain flag for storage.
    #[must_use]
    pub const fn to_stored(complete: bool) -> i16 {
        if complete {
            Self::COMPLETE
        } else {
            Self::INCOMPLETE
        }
    }

    /// Decodes a stored flag.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidCompletionFlag`] for any value other
    /// than `0` or `1`.
    pub const fn from_stored(value: i16) -> Result<bool, TaskDomainError> {
        match value {
            Self::INCOMPLETE => Ok(false),
            Self::COMPLETE => Ok(true),
            other => Err(TaskDomainError::InvalidCompletionFlag(other)),
        }
    }
}
