//! Task entity and its mutable field set.

use super::TaskId;
use serde::{Deserialize, Serialize};

/// Mutable fields of a task, as written by insert and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task title, 2 to 255 characters once validated.
    pub task_title: String,
    /// Task description, trimmed before it reaches storage.
    pub task_description: String,
    /// Whether the task has been completed.
    pub complete: bool,
}

impl TaskRecord {
    /// Creates a record from its field values.
    #[must_use]
    pub fn new(
        task_title: impl Into<String>,
        task_description: impl Into<String>,
        complete: bool,
    ) -> Self {
        Self {
            task_title: task_title.into(),
            task_description: task_description.into(),
            complete,
        }
    }
}

/// A stored task: an identifier plus the fields last written for it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    record: TaskRecord,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub const fn from_persisted(id: TaskId, record: TaskRecord) -> Self {
        Self { id, record }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.record.task_title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.record.task_description
    }

    /// Returns whether the task is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.record.complete
    }

    /// Returns the mutable field set.
    #[must_use]
    pub const fn record(&self) -> &TaskRecord {
        &self.record
    }
}
