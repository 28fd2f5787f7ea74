//! Habit model definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::Cadence;

/// A recurring habit with its running streak.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Habit {
    /// Unique identifier for the habit
    pub id: u64,

    /// Short name of the habit
    pub name: String,

    /// Optional longer description
    pub description: Option<String>,

    /// Whether the habit is tracked per day or per ISO week
    #[serde(default)]
    pub cadence: Cadence,

    /// Number of consecutive periods checked in, ending with `last_done`
    pub streak: u32,

    /// Longest streak ever reached
    pub best_streak: u32,

    /// Calendar date of the most recent accepted check-in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_done: Option<Date>,
}

impl Habit {
    /// A habit that has never been checked in.
    pub fn new(id: u64, name: impl Into<String>, cadence: Cadence) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            cadence,
            streak: 0,
            best_streak: 0,
            last_done: None,
        }
    }
}
