//! In-memory adapters for to-do task persistence.

mod task;

pub use task::InMemoryTaskRepository;
