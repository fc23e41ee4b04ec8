//! To-do task lifecycle management.
//!
//! Creating or editing a task resolves the inline directives in its name,
//! derives the status from the deadline and the current date, and persists
//! the record. Completing, reopening and refreshing a task move it through
//! the status table in [`domain::TaskStatus::apply`]. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
