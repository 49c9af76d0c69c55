//! Field rules for task form submissions.
//!
//! Each rule is a pure function over one field. [`validate_submission`]
//! runs every rule and collects all failures so the form can annotate each
//! input at once.

use super::TaskSubmission;
use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

/// Minimum title length in characters.
pub const TITLE_MIN_CHARS: usize = 2;

/// Maximum title length in characters, matching the `VARCHAR(255)` column.
pub const TITLE_MAX_CHARS: usize = 255;

/// Minimum description length in characters, after trimming.
pub const DESCRIPTION_MIN_CHARS: usize = 2;

/// Validated task form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TaskField {
    /// The `task_title` input.
    Title,
    /// The `task_description` textarea.
    Description,
}

impl TaskField {
    /// Returns the HTML input name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Title => "task_title",
            Self::Description => "task_description",
        }
    }

    /// Returns the label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Title => "Task Title",
            Self::Description => "Task Description",
        }
    }
}

/// A single failed rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The field was missing or blank.
    #[error("The {} field is required.", .field.label())]
    Required {
        /// Offending field.
        field: TaskField,
    },

    /// The field is shorter than allowed.
    #[error("The {} field must be at least {min} characters in length.", .field.label())]
    TooShort {
        /// Offending field.
        field: TaskField,
        /// Minimum length in characters.
        min: usize,
    },

    /// The field is longer than allowed.
    #[error("The {} field cannot exceed {max} characters in length.", .field.label())]
    TooLong {
        /// Offending field.
        field: TaskField,
        /// Maximum length in characters.
        max: usize,
    },
}

impl FieldError {
    /// Returns the field the rule applies to.
    #[must_use]
    pub const fn field(&self) -> TaskField {
        match self {
            Self::Required { field } | Self::TooShort { field, .. } | Self::TooLong { field, .. } => {
                *field
            }
        }
    }
}

/// Every rule failure of one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("task form validation failed with {} error(s)", .errors.len())]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Returns the failures in rule order.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the messages for one field.
    #[must_use]
    pub fn messages_for(&self, field: TaskField) -> Vec<String> {
        self.errors
            .iter()
            .filter(|error| error.field() == field)
            .map(ToString::to_string)
            .collect()
    }

    /// Returns every message, keyed by input name, for the form template.
    #[must_use]
    pub fn by_field_name(&self) -> BTreeMap<&'static str, Vec<String>> {
        let mut grouped: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
        for error in &self.errors {
            grouped
                .entry(error.field().name())
                .or_default()
                .push(error.to_string());
        }
        grouped
    }

    /// Returns every message in rule order.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Serialisable summary of validation failures for page templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    /// Every message in rule order.
    pub messages: Vec<String>,
    /// Messages grouped by input name.
    pub fields: BTreeMap<&'static str, Vec<String>>,
}

impl From<&ValidationErrors> for ValidationSummary {
    fn from(errors: &ValidationErrors) -> Self {
        Self {
            messages: errors.messages(),
            fields: errors.by_field_name(),
        }
    }
}

/// Validates the title: required, 2 to 255 characters once trimmed.
///
/// # Errors
///
/// Returns the first failed rule for the field.
pub fn validate_title(value: Option<&str>) -> Result<(), FieldError> {
    let field = TaskField::Title;
    let title = value.unwrap_or_default().trim();
    if title.is_empty() {
        return Err(FieldError::Required { field });
    }
    let length = title.chars().count();
    if length < TITLE_MIN_CHARS {
        return Err(FieldError::TooShort {
            field,
            min: TITLE_MIN_CHARS,
        });
    }
    if length > TITLE_MAX_CHARS {
        return Err(FieldError::TooLong {
            field,
            max: TITLE_MAX_CHARS,
        });
    }
    Ok(())
}

/// Validates the description: required, at least 2 characters once trimmed.
///
/// # Errors
///
/// Returns the first failed rule for the field.
pub fn validate_description(value: Option<&str>) -> Result<(), FieldError> {
    let field = TaskField::Description;
    let description = value.unwrap_or_default().trim();
    if description.is_empty() {
        return Err(FieldError::Required { field });
    }
    if description.chars().count() < DESCRIPTION_MIN_CHARS {
        return Err(FieldError::TooShort {
            field,
            min: DESCRIPTION_MIN_CHARS,
        });
    }
    Ok(())
}

/// Runs every field rule against a submission.
///
/// # Errors
///
/// Returns [`ValidationErrors`] listing each failed field.
pub fn validate_submission(submission: &TaskSubmission) -> Result<(), ValidationErrors> {
    let errors: Vec<FieldError> = [
        validate_title(submission.task_title.as_deref()),
        validate_description(submission.task_description.as_deref()),
    ]
    .into_iter()
    .filter_map(Result::err)
    .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors { errors })
    }
}
