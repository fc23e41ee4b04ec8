//! Domain model for to-do task tracking.
//!
//! The domain covers inline directive parsing, the status transition table,
//! the task aggregate and list ordering. All infrastructure concerns stay
//! outside this boundary; the current date is always read from an injected
//! clock.

mod directive;
mod error;
mod ids;
mod priority;
mod sort;
mod status;
mod task;

pub use directive::{
    ResolvedDirectives, extract_deadline, extract_priority, parse_directive_date,
    resolve_directives,
};
pub use error::{ParsePriorityError, ParseSortKeyError, ParseTaskStatusError, TaskDomainError};
pub use ids::{MIN_NAME_LENGTH, TaskId, TaskName};
pub use priority::Priority;
pub use sort::{SortKey, sort_tasks};
pub use status::{DeadlineStanding, StatusEvent, TaskStatus};
pub use task::{PersistedTaskData, Task, TaskDraft, today};
