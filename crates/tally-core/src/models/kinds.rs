//! Enumerations for habit cadence, task priority and bookmark ordering.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How often a habit is expected to be checked in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Cadence {
    /// One check-in per calendar day
    #[default]
    Daily,

    /// One check-in per ISO week (Monday through Sunday)
    Weekly,
}

impl FromStr for Cadence {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" | "d" => Ok(Cadence::Daily),
            "weekly" | "w" => Ok(Cadence::Weekly),
            _ => Err(format!("Invalid cadence: {s}")),
        }
    }
}

impl Cadence {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Cadence::Daily => "daily",
            Cadence::Weekly => "weekly",
        }
    }

    /// Unit used when describing a streak of this cadence.
    pub fn period_label(&self, count: u32) -> &'static str {
        match (self, count) {
            (Cadence::Daily, 1) => "day",
            (Cadence::Daily, _) => "days",
            (Cadence::Weekly, 1) => "week",
            (Cadence::Weekly, _) => "weeks",
        }
    }
}

/// Task priority.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Normal,
    High,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "normal" => Ok(Priority::Normal),
            "high" => Ok(Priority::High),
            _ => Err(format!("Invalid priority: {s}")),
        }
    }
}

impl Priority {
    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Normal => "normal",
            Priority::High => "high",
        }
    }

    /// Get priority with a marker for list display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tally_core::models::Priority;
    ///
    /// assert_eq!(Priority::High.with_icon(), "▲ High");
    /// assert_eq!(Priority::Normal.with_icon(), "● Normal");
    /// assert_eq!(Priority::Low.with_icon(), "▽ Low");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            Priority::High => "▲ High",
            Priority::Normal => "● Normal",
            Priority::Low => "▽ Low",
        }
    }
}

/// Secondary ordering for bookmark lists. Favorites always come first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookmarkSort {
    /// Newest first
    #[default]
    New,

    /// Most visited first
    Clicks,

    /// Alphabetical by title
    Title,
}

impl FromStr for BookmarkSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "new" | "newest" => Ok(BookmarkSort::New),
            "clicks" => Ok(BookmarkSort::Clicks),
            "title" => Ok(BookmarkSort::Title),
            _ => Err(format!("Invalid sort: {s}")),
        }
    }
}

impl BookmarkSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookmarkSort::New => "new",
            BookmarkSort::Clicks => "clicks",
            BookmarkSort::Title => "title",
        }
    }

    /// SQL `ORDER BY` clause for this ordering. Row ids follow creation
    /// order, so newest first is descending id.
    pub(crate) fn order_by(&self) -> &'static str {
        match self {
            BookmarkSort::New => "b.is_favorite DESC, b.id DESC",
            BookmarkSort::Clicks => "b.is_favorite DESC, b.clicks DESC, b.id DESC",
            BookmarkSort::Title => "b.is_favorite DESC, b.title COLLATE NOCASE ASC, b.id ASC",
        }
    }
}
