//! Task lifecycle status and the transition table that drives it.

use super::ParseTaskStatusError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a to-do task.
///
/// `Overdue` marks a task still pending after its deadline; `Late` marks a
/// task that was completed after its deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Pending and within its deadline, or without one.
    Active,
    /// Pending past its deadline.
    Overdue,
    /// Finished on time.
    Completed,
    /// Finished past its deadline.
    Late,
}

impl TaskStatus {
    /// Returns the canonical symbolic representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Overdue => "Overdue",
            Self::Completed => "Completed",
            Self::Late => "Late",
        }
    }

    /// Returns `true` for statuses of tasks that have been completed.
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Completed | Self::Late)
    }

    /// Computes the status that follows `event` from this status.
    ///
    /// This is the complete transition table; every status change a task
    /// undergoes goes through here.
    #[must_use]
    pub const fn apply(self, event: StatusEvent, standing: DeadlineStanding) -> Self {
        use DeadlineStanding::{NoDeadline, Passed, Pending};
        use StatusEvent::{Complete, Create, Edit, Incomplete, Refresh};

        match (event, self, standing) {
            (Create | Incomplete, _, Passed) => Self::Overdue,
            (Create | Incomplete, _, NoDeadline | Pending) => Self::Active,
            (Complete, _, Passed) => Self::Late,
            (Complete, _, NoDeadline | Pending) => Self::Completed,
            (Edit, Self::Active, Passed) => Self::Overdue,
            (Edit, Self::Overdue, NoDeadline | Pending) => Self::Active,
            (Edit, current, _) => current,
            (Refresh, _, Passed) => Self::Overdue,
            (Refresh, current, NoDeadline | Pending) => current,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "active" => Ok(Self::Active),
            "overdue" => Ok(Self::Overdue),
            "completed" => Ok(Self::Completed),
            "late" => Ok(Self::Late),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Operation that may move a task to a new status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusEvent {
    /// The task is being created.
    Create,
    /// The task is marked as done.
    Complete,
    /// The task is marked as not done.
    Incomplete,
    /// The task fields were edited.
    Edit,
    /// Periodic reconciliation against the current date.
    Refresh,
}

/// Position of the current date relative to a task deadline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeadlineStanding {
    /// The task has no deadline.
    NoDeadline,
    /// Today is on or before the deadline.
    Pending,
    /// Today is after the deadline.
    Passed,
}

impl DeadlineStanding {
    /// Compares `today` with an optional deadline.
    #[must_use]
    pub fn evaluate(deadline: Option<NaiveDate>, today: NaiveDate) -> Self {
        match deadline {
            None => Self::NoDeadline,
            Some(date) if today > date => Self::Passed,
            Some(_) => Self::Pending,
        }
    }
}
