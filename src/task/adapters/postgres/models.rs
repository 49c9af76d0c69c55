//! Diesel row models for task persistence.

use super::schema::tasks;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Storage-assigned task identifier.
    pub id: i64,
    /// Task title.
    pub task_title: String,
    /// Trimmed task description.
    pub task_description: String,
    /// Completion flag as stored.
    pub complete: i16,
}

/// Column values written by insert and update.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct TaskChangeset {
    /// Task title.
    pub task_title: String,
    /// Trimmed task description.
    pub task_description: String,
    /// Completion flag as stored.
    pub complete: i16,
}
