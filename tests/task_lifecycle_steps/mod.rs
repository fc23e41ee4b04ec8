//! Step definitions for to-do task lifecycle scenarios.

pub mod world;
mod given;
mod then;
