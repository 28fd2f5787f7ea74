//! High-level async API for tasks, habits and bookmarks.
//!
//! [`Tracker`] is the single entry point the CLI and the MCP server use. Each
//! operation validates its parameters, then runs the storage call on a
//! blocking thread with its own SQLite connection.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Params      │    │     Tracker     │    │    Database     │
//! │ (strings from   │───▶│ (validation,    │───▶│   (via db/)     │
//! │  CLI / MCP)     │    │  spawn_blocking)│    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: creates [`Tracker`] instances and the database file
//! - [`task_ops`], [`habit_ops`], [`bookmark_ops`], [`dashboard_ops`]:
//!   operations per resource
//!
//! # Usage
//!
//! ```rust
//! use tally_core::{
//!     params::{CheckIn, CreateHabit},
//!     TrackerBuilder,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let dir = tempfile::tempdir()?;
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some(dir.path().join("tally.db")))
//!     .build()
//!     .await?;
//!
//! let habit = tracker
//!     .create_habit(&CreateHabit {
//!         name: "Read 20 pages".to_string(),
//!         description: None,
//!         cadence: Some("daily".to_string()),
//!     })
//!     .await?;
//!
//! let outcome = tracker
//!     .check_in_habit(&CheckIn {
//!         id: habit.id,
//!         date: Some("2024-01-10".to_string()),
//!     })
//!     .await?;
//! assert!(outcome.changed);
//! assert_eq!(outcome.habit.streak, 1);
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{Result, TrackerError},
};

pub mod bookmark_ops;
pub mod builder;
pub mod dashboard_ops;
pub mod habit_ops;
pub mod task_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Main tracker interface.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    /// Creates a tracker for an already initialized database.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` against a fresh connection on a blocking thread.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(TrackerError::join)?
    }
}
