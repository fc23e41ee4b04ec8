//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDate;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Symbolic lifecycle status.
    pub status: String,
    /// Symbolic priority.
    pub priority: String,
    /// Creation date.
    pub create_time: NaiveDate,
    /// Latest edit date.
    pub edit_time: NaiveDate,
}

/// Insert and update model for task records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Task name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Symbolic lifecycle status.
    pub status: String,
    /// Symbolic priority.
    pub priority: String,
    /// Creation date.
    pub create_time: NaiveDate,
    /// Latest edit date.
    pub edit_time: NaiveDate,
}
