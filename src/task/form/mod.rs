//! Conversion between HTML form fields and task records.
//!
//! [`adapter`] maps submissions to records and stored tasks to display and
//! form values. [`validation`] holds the field rules applied to a raw
//! submission before the adapter runs.

pub mod adapter;
pub mod validation;

pub use adapter::{
    ConfirmationSubmission, TaskDisplay, TaskFormValues, TaskSubmission, completion_label,
    from_stored, from_submission,
};
pub use validation::{
    FieldError, TaskField, ValidationErrors, ValidationSummary, validate_submission,
};
