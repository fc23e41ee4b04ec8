//! Application services for to-do task orchestration.

mod lifecycle;

pub use lifecycle::{
    CreateTaskRequest, EditTaskRequest, TaskErrorKind, TaskLifecycleError, TaskLifecycleResult,
    TaskLifecycleService,
};
