//! Aggregate queries for the dashboard overview.

use jiff::{civil::Date, ToSpan};

use crate::{
    error::Result,
    models::{DailyCount, Dashboard},
};

/// Habits shown on the dashboard.
pub const TOP_HABITS: usize = 5;
/// Tags shown on the dashboard.
pub const TOP_TAGS: usize = 10;
/// Bookmarks shown on the dashboard.
pub const RECENT_BOOKMARKS: usize = 6;
/// Days covered by the completion series, including today.
pub const COMPLETION_WINDOW_DAYS: i64 = 14;

impl super::Database {
    /// Builds the dashboard for `today`.
    pub fn dashboard(&self, today: Date) -> Result<Dashboard> {
        let from = today.saturating_sub((COMPLETION_WINDOW_DAYS - 1).days());
        let completed_on = self.completion_dates(from)?;

        Ok(Dashboard {
            today,
            open_tasks: self.count_open_tasks()?,
            top_habits: self.list_habits(Some(TOP_HABITS))?,
            top_tags: self.top_tags(TOP_TAGS)?,
            recent_bookmarks: self.recent_bookmarks(RECENT_BOOKMARKS)?,
            completions: completion_series(from, today, &completed_on),
        })
    }
}

/// Count of `dates` falling on each day of `from..=to`, oldest first.
fn completion_series(from: Date, to: Date, dates: &[Date]) -> Vec<DailyCount> {
    from.series(1.day())
        .take_while(|day| *day <= to)
        .map(|day| {
            let count = dates.iter().filter(|d| **d == day).count();
            DailyCount {
                date: day,
                count: u32::try_from(count).unwrap_or(u32::MAX),
            }
        })
        .collect()
}
