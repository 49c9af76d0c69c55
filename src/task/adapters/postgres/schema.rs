//! Diesel schema for task persistence.

diesel::table! {
    /// Task records managed through the HTML forms.
    tasks (id) {
        /// Storage-assigned task identifier.
        id -> Int8,
        /// Task title.
        #[max_length = 255]
        task_title -> Varchar,
        /// Trimmed task description.
        task_description -> Text,
        /// Completion flag, 0 or 1.
        complete -> Int2,
    }
}
