//! `PostgreSQL` adapters for to-do task persistence.

mod migrations;
mod models;
mod repository;
mod schema;

pub use migrations::{CREATE_TASKS_SQL, DROP_TASKS_SQL, apply_migrations, revert_migrations};
pub use repository::{PostgresTaskRepository, TaskPgPool};
