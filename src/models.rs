//! Frontend Models
//!
//! Data structures for the in-memory task list.

use serde::{Deserialize, Serialize};

/// One canned plan step attached to a task at creation time.
///
/// `id` is only unique within the parent task's subtask list (1..=3).
/// `time` is a display label, not a parsed duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub id: u32,
    pub text: String,
    pub time: String,
    pub completed: bool,
}

/// A top-level to-do item with a fixed set of generated subtasks.
///
/// `completed` is independent of subtask completion; the two are never
/// linked. `subtasks` is fixed at creation and never resized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub text: String,
    pub completed: bool,
    pub subtasks: Vec<Subtask>,
}
