//! Data models for tasks, habits and bookmarks.
//!
//! This module contains the domain models of the tally application. Display
//! implementations live in [`crate::display::models`] so that presentation
//! stays separate from the data structures.
//!
//! Dates that carry no time of day (due dates, check-in dates) use
//! [`jiff::civil::Date`]; creation and completion instants use
//! [`jiff::Timestamp`] in UTC.
//!
//! # Examples
//!
//! ```rust
//! use tally_core::models::{Cadence, Habit};
//!
//! let habit = Habit::new(1, "Stretch", Cadence::Daily);
//! assert_eq!(habit.streak, 0);
//! assert!(habit.last_done.is_none());
//! println!("{}", habit); // markdown with name, cadence and streak
//! ```

pub mod bookmark;
pub mod dashboard;
pub mod filters;
pub mod habit;
pub mod kinds;
pub mod requests;
pub mod task;

#[cfg(test)]
mod tests;

pub use bookmark::{Bookmark, TagCount};
pub use dashboard::{DailyCount, Dashboard};
pub use filters::{BookmarkFilter, TaskFilter};
pub use habit::Habit;
pub use kinds::{BookmarkSort, Cadence, Priority};
pub use requests::{BookmarkChanges, HabitChanges, NewBookmark, NewHabit, NewTask, TaskChanges};
pub use task::Task;
