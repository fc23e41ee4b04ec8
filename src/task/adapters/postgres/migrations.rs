//! Embedded schema migrations for the task tables.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;

/// SQL creating the `tasks` table.
pub const CREATE_TASKS_SQL: &str =
    include_str!("../../../../migrations/2025-04-16-000000_create_tasks/up.sql");

/// SQL dropping the `tasks` table.
pub const DROP_TASKS_SQL: &str =
    include_str!("../../../../migrations/2025-04-16-000000_create_tasks/down.sql");

/// Applies every task schema migration.
///
/// The statements are idempotent, so running them against an already
/// migrated database is a no-op.
///
/// # Errors
///
/// Returns the underlying Diesel error when a statement fails.
pub fn apply_migrations(connection: &mut PgConnection) -> diesel::QueryResult<()> {
    connection.batch_execute(CREATE_TASKS_SQL)
}

/// Reverts every task schema migration.
///
/// # Errors
///
/// Returns the underlying Diesel error when a statement fails.
pub fn revert_migrations(connection: &mut PgConnection) -> diesel::QueryResult<()> {
    connection.batch_execute(DROP_TASKS_SQL)
}
