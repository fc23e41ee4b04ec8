//! Diesel schema for to-do task persistence.

diesel::table! {
    /// To-do task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task name with directives stripped.
        name -> Text,
        /// Optional free-text description.
        description -> Nullable<Text>,
        /// Optional deadline date.
        deadline -> Nullable<Date>,
        /// Symbolic lifecycle status.
        #[max_length = 20]
        status -> Varchar,
        /// Symbolic priority.
        #[max_length = 20]
        priority -> Varchar,
        /// Creation date.
        create_time -> Date,
        /// Latest edit date.
        edit_time -> Date,
        /// Insertion sequence used for listing order.
        position -> Int8,
    }
}
