//! Todo id generation.
//!
//! Ids are never derived from wall-clock time: two adds inside the same clock
//! tick must still get distinct ids.

use uuid::Uuid;

use crate::types::TodoId;

/// Source of fresh [`TodoId`]s.
pub trait IdGenerator {
    fn next_id(&mut self) -> TodoId;
}

/// `todo-<uuid v4>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> TodoId {
        TodoId(format!("todo-{}", Uuid::new_v4().simple()))
    }
}

/// Monotonic counter, `todo-1`, `todo-2`, ...
#[derive(Debug, Clone, Default)]
pub struct SequentialIdGenerator {
    next: u64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue counting after `last`.
    pub fn starting_after(last: u64) -> Self {
        Self { next: last }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> TodoId {
        self.next += 1;
        TodoId(format!("todo-{}", self.next))
    }
}
