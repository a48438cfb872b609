//! Completion-state filter modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Todo;

/// Which rows a list view shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Active,
    Completed,
}

impl FilterMode {
    /// All modes in filter-bar order.
    pub fn all() -> &'static [FilterMode] {
        &[FilterMode::All, FilterMode::Active, FilterMode::Completed]
    }

    /// Whether `todo` is shown under this mode. Pure; never mutates.
    pub fn matches(self, todo: &Todo) -> bool {
        self.shows(todo.completed)
    }

    /// Whether an entry with this completion state is shown.
    pub fn shows(self, completed: bool) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Active => !completed,
            FilterMode::Completed => completed,
        }
    }

    /// The todos shown under this mode, in collection order.
    pub fn apply(self, todos: &[Todo]) -> impl Iterator<Item = &Todo> + '_ {
        todos.iter().filter(move |t| self.matches(t))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Active => "active",
            FilterMode::Completed => "completed",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterMode::All),
            "active" => Ok(FilterMode::Active),
            "completed" => Ok(FilterMode::Completed),
            other => Err(format!(
                "unknown filter '{other}'; expected: all, active, completed"
            )),
        }
    }
}
