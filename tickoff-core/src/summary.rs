//! Counts derived from the collection after every mutation.

use serde::Serialize;

use crate::types::Todo;

/// Remaining / completed / total counts plus the empty-state switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ListSummary {
    pub total: usize,
    pub remaining: usize,
    pub completed: usize,
}

impl ListSummary {
    pub fn of(todos: &[Todo]) -> Self {
        let remaining = todos.iter().filter(|t| !t.completed).count();
        Self {
            total: todos.len(),
            remaining,
            completed: todos.len() - remaining,
        }
    }

    /// The "all clear" indicator is shown iff there is nothing in the list.
    pub fn show_all_clear(&self) -> bool {
        self.total == 0
    }

    /// Filter bar and clear action are shown iff the list is non-empty.
    pub fn show_list_controls(&self) -> bool {
        self.total > 0
    }

    /// `"1 item left"` / `"3 items left"`.
    pub fn remaining_label(&self) -> String {
        match self.remaining {
            1 => "1 item left".to_string(),
            n => format!("{n} items left"),
        }
    }
}
