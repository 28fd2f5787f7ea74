//! Result wrapper types for displaying operation outcomes.
//!
//! This module provides wrapper types that format the results of create,
//! update, delete and check-in operations with consistent messaging followed
//! by the affected resource.

use std::fmt;

use serde::Serialize;

use crate::models::{Bookmark, Habit, Task};

/// A resource that result wrappers can name in their messages.
pub trait Resource: fmt::Display {
    /// Lowercase resource kind, e.g. `"task"`.
    const KIND: &'static str;

    fn id(&self) -> u64;

    /// Human-readable title or name.
    fn label(&self) -> &str;
}

impl Resource for Task {
    const KIND: &'static str = "task";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

impl Resource for Habit {
    const KIND: &'static str = "habit";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.name
    }
}

impl Resource for Bookmark {
    const KIND: &'static str = "bookmark";

    fn id(&self) -> u64 {
        self.id
    }

    fn label(&self) -> &str {
        &self.title
    }
}

/// Wrapper type for displaying the result of create operations.
///
/// # Examples
///
/// ```rust
/// use tally_core::{
///     display::CreateResult,
///     models::{Cadence, Habit},
/// };
///
/// let result = CreateResult::new(Habit::new(1, "Stretch", Cadence::Daily));
/// let output = result.to_string();
/// assert!(output.starts_with("Created habit with ID: 1"));
/// assert!(output.contains("# 1. Stretch"));
/// ```
#[derive(Debug, Clone)]
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for CreateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Created {} with ID: {}", T::KIND, self.resource.id())?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of update operations.
///
/// Optionally lists the changes that were applied.
#[derive(Debug, Clone)]
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
}

impl<T> UpdateResult<T> {
    /// Create a new UpdateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self {
            resource,
            changes: Vec::new(),
        }
    }

    /// Create an UpdateResult with a list of changes made.
    pub fn with_changes(resource: T, changes: Vec<String>) -> Self {
        Self { resource, changes }
    }
}

impl<T: Resource> fmt::Display for UpdateResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated {} with ID: {}", T::KIND, self.resource.id())?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Wrapper type for displaying the result of delete operations.
#[derive(Debug, Clone)]
pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    /// Create a new DeleteResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl<T: Resource> fmt::Display for DeleteResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted {} '{}' (ID: {})",
            T::KIND,
            self.resource.label(),
            self.resource.id()
        )
    }
}

/// Outcome of a habit check-in: the habit as it now stands and whether the
/// check-in was accepted.
#[derive(Debug, Clone, Serialize)]
pub struct CheckInOutcome {
    pub habit: Habit,
    pub changed: bool,
}

impl CheckInOutcome {
    /// Message shown to the user.
    pub fn message(&self) -> &'static str {
        if self.changed {
            "Checked in. Keep it going!"
        } else {
            "Already checked in for this period."
        }
    }
}

impl fmt::Display for CheckInOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.message())?;
        writeln!(f)?;
        write!(f, "{}", self.habit)
    }
}
