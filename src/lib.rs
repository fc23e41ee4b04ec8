//! To-do task tracking backend.
//!
//! This crate provides the core of a task tracker: tasks carry a name,
//! optional description and deadline, a priority and a lifecycle status.
//! Names may embed inline directives (`!before 17.04.2025`, `!1` to `!4`)
//! that set the deadline and priority.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory, `PostgreSQL`)
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, directive parsing and list ordering
//! - [`config`]: File and environment configuration
//! - [`telemetry`]: Log subscriber setup

pub mod config;
pub mod task;
pub mod telemetry;
