//! Task model definition.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::Priority;

/// A to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Unique identifier for the task
    pub id: u64,

    /// Title of the task
    pub title: String,

    /// Free-form notes
    pub notes: Option<String>,

    /// Calendar date the task is due
    pub due_date: Option<Date>,

    /// Task priority
    #[serde(default)]
    pub priority: Priority,

    /// Whether the task has been completed
    pub completed: bool,

    /// Timestamp when the task was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the task was completed (UTC), present iff `completed`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<Timestamp>,
}

impl Task {
    /// Apply a completion change, keeping `completed_at` consistent.
    ///
    /// Returns `true` when the completion state actually changed.
    pub fn set_completed(&mut self, completed: bool, now: Timestamp) -> bool {
        if completed == self.completed {
            return false;
        }
        self.completed = completed;
        self.completed_at = completed.then_some(now);
        true
    }
}
