//! Form adapter between HTML field values and task records.

use crate::task::domain::{Task, TaskRecord};
use serde::{Deserialize, Serialize};

/// Label shown for completed tasks.
pub const COMPLETE_LABEL: &str = "Complete";

/// Label shown for tasks that are not complete.
pub const INCOMPLETE_LABEL: &str = "Incomplete";

/// Raw fields of a task form submission.
///
/// Every field is optional because browsers omit unchecked checkboxes and
/// hand-built requests may omit anything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TaskSubmission {
    /// Submitted title, untrimmed.
    pub task_title: Option<String>,
    /// Submitted description, untrimmed.
    pub task_description: Option<String>,
    /// Checkbox value; present means checked, whatever its content.
    pub complete: Option<String>,
    /// Label of the button used to submit the form.
    pub submit: Option<String>,
}

impl TaskSubmission {
    /// Returns `true` when the submit button carried exactly `token`.
    #[must_use]
    pub fn confirms(&self, token: &str) -> bool {
        self.submit.as_deref() == Some(token)
    }

    /// Returns `true` when the completion checkbox was present.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.complete.is_some()
    }
}

/// Body of the delete confirmation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfirmationSubmission {
    /// Label of the button used to submit the form.
    pub submit: Option<String>,
}

impl ConfirmationSubmission {
    /// Returns `true` when the submit button carried exactly `token`.
    #[must_use]
    pub fn confirms(&self, token: &str) -> bool {
        self.submit.as_deref() == Some(token)
    }
}

/// Display-ready projection of a stored task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDisplay {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub task_title: String,
    /// Task description.
    pub task_description: String,
    /// Completion flag.
    pub complete: bool,
    /// Human-readable completion label.
    pub complete_formatted: &'static str,
}

/// Values bound to the create/edit form inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskFormValues {
    /// Title input value.
    pub task_title: String,
    /// Description textarea value.
    pub task_description: String,
    /// Whether the completion checkbox is checked.
    pub complete: bool,
}

impl TaskFormValues {
    /// Empty form for a new task.
    #[must_use]
    pub fn defaults() -> Self {
        Self::default()
    }

    /// Form prefilled from a stored task.
    #[must_use]
    pub fn from_stored(task: &Task) -> Self {
        Self {
            task_title: task.title().to_owned(),
            task_description: task.description().to_owned(),
            complete: task.is_complete(),
        }
    }

    /// Form echoing a rejected submission exactly as it was typed.
    #[must_use]
    pub fn from_submission(submission: &TaskSubmission) -> Self {
        Self {
            task_title: submission.task_title.clone().unwrap_or_default(),
            task_description: submission.task_description.clone().unwrap_or_default(),
            complete: submission.is_checked(),
        }
    }
}

/// Returns the completion label for a flag.
#[must_use]
pub const fn completion_label(complete: bool) -> &'static str {
    if complete {
        COMPLETE_LABEL
    } else {
        INCOMPLETE_LABEL
    }
}

/// Builds the display projection of a stored task.
#[must_use]
pub fn from_stored(task: &Task) -> TaskDisplay {
    TaskDisplay {
        id: task.id().value(),
        task_title: task.title().to_owned(),
        task_description: task.description().to_owned(),
        complete: task.is_complete(),
        complete_formatted: completion_label(task.is_complete()),
    }
}

/// Builds the record written to storage from a submission.
///
/// Title and description are trimmed and checkbox presence becomes the completion
/// flag. No validation happens here; see
/// [`validate_submission`](super::validate_submission).
#[must_use]
pub fn from_submission(submission: &TaskSubmission) -> TaskRecord {
    TaskRecord::new(
        submission.task_title.as_deref().unwrap_or_default().trim(),
        submission
            .task_description
            .as_deref()
            .unwrap_or_default()
            .trim(),
        submission.is_checked(),
    )
}
