//! Task priority levels.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a task, ordered from most to least urgent.
///
/// The declaration order is the sort order used by the list sorter.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Priority {
    /// Must be handled first. Inline directive `!1`.
    Critical,
    /// Inline directive `!2`.
    High,
    /// Applied when no priority is given. Inline directive `!3`.
    #[default]
    Medium,
    /// Inline directive `!4`.
    Low,
}

impl Priority {
    /// Priorities in the order their inline directives are checked.
    pub const DIRECTIVE_ORDER: [Self; 4] = [Self::Critical, Self::High, Self::Medium, Self::Low];

    /// Returns the canonical symbolic representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Returns the inline directive that selects this priority.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Critical => "!1",
            Self::High => "!2",
            Self::Medium => "!3",
            Self::Low => "!4",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}
