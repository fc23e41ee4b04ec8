//! Service layer for to-do task creation, editing and status changes.

use crate::task::{
    domain::{Priority, SortKey, Task, TaskDomainError, TaskDraft, TaskId, sort_tasks},
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
///
/// The name may carry inline `!before` and `!<digit>` directives; explicit
/// `deadline` and `priority` values take precedence over them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    deadline: Option<NaiveDate>,
    #[serde(default)]
    priority: Option<Priority>,
}

impl CreateTaskRequest {
    /// Creates a request with the raw task name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deadline: None,
            priority: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets an explicit deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets an explicit priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    fn into_draft(self) -> Result<TaskDraft, TaskDomainError> {
        TaskDraft::resolve(&self.name, self.description, self.deadline, self.priority)
    }
}

/// Request payload for editing a task.
///
/// Every editable field is replaced: omitting the deadline clears it unless
/// the name carries a deadline directive, and omitting the priority falls
/// back to the name directive or the default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTaskRequest {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    deadline: Option<NaiveDate>,
    #[serde(default)]
    priority: Option<Priority>,
}

impl EditTaskRequest {
    /// Creates a request with the raw replacement name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            deadline: None,
            priority: None,
        }
    }

    /// Sets the replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets an explicit replacement deadline.
    #[must_use]
    pub const fn with_deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Sets an explicit replacement priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    fn into_draft(self) -> Result<TaskDraft, TaskDomainError> {
        TaskDraft::resolve(&self.name, self.description, self.deadline, self.priority)
    }
}

/// Coarse classification of service failures for callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskErrorKind {
    /// The addressed task does not exist.
    NotFound,
    /// The request was missing or failed validation.
    InvalidInput,
    /// Any other failure, such as a storage error.
    Unexpected,
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// No task exists for the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The request payload was not supplied.
    #[error("request payload is missing")]
    MissingPayload,
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

impl TaskLifecycleError {
    /// Classifies the error for callers.
    #[must_use]
    pub const fn kind(&self) -> TaskErrorKind {
        match self {
            Self::NotFound(_) => TaskErrorKind::NotFound,
            Self::MissingPayload | Self::Domain(_) => TaskErrorKind::InvalidInput,
            Self::Repository(_) => TaskErrorKind::Unexpected,
        }
    }
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(id) => Self::NotFound(id),
            other => Self::Repository(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and persists a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] when the name is too short
    /// after directive stripping, or [`TaskLifecycleError::Repository`] when
    /// persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let draft = request.into_draft()?;
        debug!(
            name = %draft.name(),
            deadline = ?draft.deadline(),
            priority = %draft.priority(),
            "resolved task directives"
        );

        let task = Task::new(draft, &*self.clock);
        self.repository.add(&task).await?;
        info!(
            task_id = %task.id(),
            status = %task.status(),
            priority = %task.priority(),
            "created task"
        );
        Ok(task)
    }

    /// Replaces the editable fields of a task and reconciles its status.
    ///
    /// The stored task is left unchanged when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// [`TaskLifecycleError::MissingPayload`] when `request` is `None`,
    /// [`TaskLifecycleError::Domain`] when the new name is invalid, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn edit_task(
        &self,
        id: TaskId,
        request: Option<EditTaskRequest>,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.require(id).await?;
        let draft = request
            .ok_or(TaskLifecycleError::MissingPayload)?
            .into_draft()?;

        task.edit(draft, &*self.clock);
        self.repository.update(&task).await?;
        info!(task_id = %id, status = %task.status(), "edited task");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete_task(&self, id: TaskId) -> TaskLifecycleResult<()> {
        let task = self.require(id).await?;
        self.repository.remove(task.id()).await?;
        info!(task_id = %id, "deleted task");
        Ok(())
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn get_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        self.require(id).await
    }

    /// Marks a task as done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn complete_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.require(id).await?;
        task.complete(&*self.clock);
        self.repository.update(&task).await?;
        info!(task_id = %id, status = %task.status(), "completed task");
        Ok(task)
    }

    /// Marks a task as not done.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn incomplete_task(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.require(id).await?;
        task.mark_incomplete(&*self.clock);
        self.repository.update(&task).await?;
        info!(task_id = %id, status = %task.status(), "reopened task");
        Ok(task)
    }

    /// Reconciles a task status with the current date.
    ///
    /// The task is only written back when its status changes.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist,
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn refresh_status(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let mut task = self.require(id).await?;
        if task.refresh_status(&*self.clock) {
            self.repository.update(&task).await?;
            info!(task_id = %id, status = %task.status(), "refreshed task status");
        }
        Ok(task)
    }

    /// Lists every task, ordered by `sort` when given.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn list_tasks(&self, sort: Option<SortKey>) -> TaskLifecycleResult<Vec<Task>> {
        let tasks = self.repository.find_all().await?;
        debug!(count = tasks.len(), sort = ?sort, "listing tasks");
        Ok(sort_tasks(tasks, sort))
    }

    async fn require(&self, id: TaskId) -> TaskLifecycleResult<Task> {
        let found = self.repository.find_by_id(id).await?;
        found.ok_or_else(|| {
            warn!(task_id = %id, "task not found");
            TaskLifecycleError::NotFound(id)
        })
    }
}
