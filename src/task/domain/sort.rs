//! Ordering of task lists.

use super::{ParseSortKeyError, Task};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Field and direction used to order a task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// Status in declaration order.
    StatusAsc,
    /// Status in reverse declaration order.
    StatusDesc,
    /// Priority from critical to low.
    PriorityAsc,
    /// Priority from low to critical.
    PriorityDesc,
    /// Deadline from earliest, tasks without a deadline first.
    DeadlineAsc,
    /// Deadline from latest, tasks without a deadline last.
    DeadlineDesc,
    /// Creation date from oldest.
    CreateTimeAsc,
    /// Creation date from newest.
    CreateTimeDesc,
}

impl SortKey {
    /// Every supported sort key.
    pub const ALL: [Self; 8] = [
        Self::StatusAsc,
        Self::StatusDesc,
        Self::PriorityAsc,
        Self::PriorityDesc,
        Self::DeadlineAsc,
        Self::DeadlineDesc,
        Self::CreateTimeAsc,
        Self::CreateTimeDesc,
    ];

    /// Returns the canonical symbolic representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::StatusAsc => "StatusAsc",
            Self::StatusDesc => "StatusDesc",
            Self::PriorityAsc => "PriorityAsc",
            Self::PriorityDesc => "PriorityDesc",
            Self::DeadlineAsc => "DeadlineAsc",
            Self::DeadlineDesc => "DeadlineDesc",
            Self::CreateTimeAsc => "CreateTimeAsc",
            Self::CreateTimeDesc => "CreateTimeDesc",
        }
    }

    /// Returns `true` when the key reverses the natural field order.
    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(
            self,
            Self::StatusDesc | Self::PriorityDesc | Self::DeadlineDesc | Self::CreateTimeDesc
        )
    }

    /// Compares two tasks on this key's field in ascending order.
    fn compare_field(self, left: &Task, right: &Task) -> Ordering {
        match self {
            Self::StatusAsc | Self::StatusDesc => left.status().cmp(&right.status()),
            Self::PriorityAsc | Self::PriorityDesc => left.priority().cmp(&right.priority()),
            // `None` orders before every date.
            Self::DeadlineAsc | Self::DeadlineDesc => left.deadline().cmp(&right.deadline()),
            Self::CreateTimeAsc | Self::CreateTimeDesc => {
                left.create_time().cmp(&right.create_time())
            }
        }
    }

    /// Compares two tasks according to this key.
    #[must_use]
    pub fn compare(self, left: &Task, right: &Task) -> Ordering {
        let ordering = self.compare_field(left, right);
        if self.is_descending() {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for SortKey {
    type Error = ParseSortKeyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ParseSortKeyError(value.to_owned()))
    }
}

/// Orders `tasks` by `key`.
///
/// The sort is stable, so tied tasks keep the order they arrived in. Without
/// a key the input order is returned unchanged.
#[must_use]
pub fn sort_tasks(mut tasks: Vec<Task>, key: Option<SortKey>) -> Vec<Task> {
    if let Some(sort_key) = key {
        tasks.sort_by(|left, right| sort_key.compare(left, right));
    }
    tasks
}
