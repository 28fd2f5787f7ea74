//! Core library for tally: tasks, habit streaks and bookmarks.
//!
//! This crate holds everything except the user interfaces: data models,
//! parameter validation, the habit streak engine, SQLite storage and the
//! async [`Tracker`] facade used by the CLI and the MCP server.
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): implement [`std::fmt::Display`] as
//!   markdown
//! - **Display Wrappers** ([`display`]): lists and operation results
//! - **Terminal Rendering**: done by the CLI's terminal renderer
//!
//! # Quick Start
//!
//! ```rust
//! use tally_core::{
//!     params::{CreateTask, ListTasks},
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("test.db"))
//!     .build()
//!     .await?;
//!
//! let task = tracker
//!     .create_task(&CreateTask {
//!         title: "Water the plants".to_string(),
//!         due_date: Some("2024-06-01".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{task}");
//!
//! let open = tracker
//!     .list_tasks(&ListTasks {
//!         hide_completed: true,
//!         ..Default::default()
//!     })
//!     .await?;
//! println!("{open}");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod streak;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    Bookmarks, CheckInOutcome, CreateResult, DeleteResult, Habits, LocalDateTime,
    OperationStatus, TagCounts, Tasks, UpdateResult,
};
pub use error::{Result, TrackerError};
pub use models::{
    Bookmark, BookmarkFilter, BookmarkSort, Cadence, Dashboard, Habit, Priority, Task, TaskFilter,
};
pub use streak::{check_in, today_utc, week_of};
pub use tracker::{Tracker, TrackerBuilder};
