//! Dashboard overview types.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Bookmark, Habit, TagCount};

/// Number of tasks completed on a given day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyCount {
    pub date: Date,
    pub count: u32,
}

/// Home screen summary across all three resources.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dashboard {
    /// Date the overview was computed for (UTC)
    pub today: Date,
    /// Number of tasks not yet completed
    pub open_tasks: u64,
    /// Habits with the longest running streaks
    pub top_habits: Vec<Habit>,
    /// Most used bookmark tags
    pub top_tags: Vec<TagCount>,
    /// Most recently added bookmarks
    pub recent_bookmarks: Vec<Bookmark>,
    /// Completed tasks per day, oldest first, ending with `today`
    pub completions: Vec<DailyCount>,
}

impl Dashboard {
    /// Total completions across the series.
    pub fn completed_in_window(&self) -> u32 {
        self.completions.iter().map(|day| day.count).sum()
    }
}
