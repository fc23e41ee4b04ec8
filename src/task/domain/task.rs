//! Task aggregate root and the draft values used to create or edit it.

use super::{
    DeadlineStanding, Priority, StatusEvent, TaskDomainError, TaskId, TaskName, TaskStatus,
    resolve_directives,
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Returns the current calendar date in UTC.
#[must_use]
pub fn today(clock: &impl Clock) -> NaiveDate {
    clock.utc().date_naive()
}

/// Validated field values for a task, with inline directives resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    name: TaskName,
    description: Option<String>,
    deadline: Option<NaiveDate>,
    priority: Priority,
}

impl TaskDraft {
    /// Resolves inline directives in `raw_name` and validates the result.
    ///
    /// Out-of-band `deadline` and `priority` values take precedence over
    /// directives found in the name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::NameTooShort`] when the stripped name is
    /// too short.
    pub fn resolve(
        raw_name: &str,
        description: Option<String>,
        deadline: Option<NaiveDate>,
        priority: Option<Priority>,
    ) -> Result<Self, TaskDomainError> {
        let resolved = resolve_directives(raw_name, deadline, priority);
        Ok(Self {
            name: TaskName::new(resolved.name)?,
            description,
            deadline: resolved.deadline,
            priority: resolved.priority,
        })
    }

    /// Returns the validated name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the resolved deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the resolved priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// To-do task aggregate root.
///
/// Serializes to the shape returned to callers: camelCase field names with
/// status and priority rendered as their symbolic names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: TaskId,
    name: TaskName,
    description: Option<String>,
    deadline: Option<NaiveDate>,
    status: TaskStatus,
    priority: Priority,
    create_time: NaiveDate,
    edit_time: NaiveDate,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: TaskName,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted deadline, if any.
    pub deadline: Option<NaiveDate>,
    /// Persisted lifecycle status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted creation date.
    pub create_time: NaiveDate,
    /// Persisted latest edit date.
    pub edit_time: NaiveDate,
}

impl Task {
    /// Creates a new task from a resolved draft.
    ///
    /// The initial status is derived from the deadline and the current date.
    #[must_use]
    pub fn new(draft: TaskDraft, clock: &impl Clock) -> Self {
        let date = today(clock);
        let TaskDraft {
            name,
            description,
            deadline,
            priority,
        } = draft;
        let status = TaskStatus::Active.apply(
            StatusEvent::Create,
            DeadlineStanding::evaluate(deadline, date),
        );

        Self {
            id: TaskId::new(),
            name,
            description,
            deadline,
            status,
            priority,
            create_time: date,
            edit_time: date,
        }
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            deadline: data.deadline,
            status: data.status,
            priority: data.priority,
            create_time: data.create_time,
            edit_time: data.edit_time,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the task description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the task deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    /// Returns the lifecycle status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the creation date.
    #[must_use]
    pub const fn create_time(&self) -> NaiveDate {
        self.create_time
    }

    /// Returns the date of the latest change.
    #[must_use]
    pub const fn edit_time(&self) -> NaiveDate {
        self.edit_time
    }

    /// Replaces the editable fields with `draft` and reconciles the status.
    ///
    /// Finished tasks keep their status; pending tasks move between
    /// `Active` and `Overdue` to match the new deadline.
    pub fn edit(&mut self, draft: TaskDraft, clock: &impl Clock) {
        self.name = draft.name;
        self.description = draft.description;
        self.deadline = draft.deadline;
        self.priority = draft.priority;
        self.transition(StatusEvent::Edit, clock);
    }

    /// Marks the task as done, recording whether it was finished late.
    pub fn complete(&mut self, clock: &impl Clock) {
        self.transition(StatusEvent::Complete, clock);
    }

    /// Marks the task as not done.
    pub fn mark_incomplete(&mut self, clock: &impl Clock) {
        self.transition(StatusEvent::Incomplete, clock);
    }

    /// Moves the task to `Overdue` once its deadline has passed.
    ///
    /// Refreshing never changes the edit date. Returns `true` if the status
    /// changed.
    pub fn refresh_status(&mut self, clock: &impl Clock) -> bool {
        let next = self.next_status(StatusEvent::Refresh, today(clock));
        if next == self.status {
            return false;
        }
        self.status = next;
        true
    }

    fn transition(&mut self, event: StatusEvent, clock: &impl Clock) {
        let date = today(clock);
        self.status = self.next_status(event, date);
        self.touch(date);
    }

    fn next_status(&self, event: StatusEvent, date: NaiveDate) -> TaskStatus {
        self.status
            .apply(event, DeadlineStanding::evaluate(self.deadline, date))
    }

    /// Updates the edit date, never moving it before the creation date.
    fn touch(&mut self, date: NaiveDate) {
        self.edit_time = date.max(self.create_time);
    }
}
