//! Filter types for querying tasks and bookmarks.

use super::{requests::parse_priority, BookmarkSort, Priority};
use crate::{
    error::{Result, TrackerError},
    params::{ListBookmarks, ListTasks},
};

/// Filter options for querying tasks.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFilter {
    /// Case-insensitive substring of title or notes
    pub query: Option<String>,

    /// Exact priority match
    pub priority: Option<Priority>,

    /// Whether completed tasks are listed
    pub include_completed: bool,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            query: None,
            priority: None,
            include_completed: true,
        }
    }
}

/// Filter options for querying bookmarks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkFilter {
    /// Case-insensitive substring of title, notes or URL
    pub query: Option<String>,

    /// Exact tag name
    pub tag: Option<String>,

    /// Only favorites
    pub favorites_only: bool,

    /// Secondary ordering after favorites
    pub sort: BookmarkSort,
}

fn non_blank(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(String::from)
}

impl TryFrom<&ListTasks> for TaskFilter {
    type Error = TrackerError;

    /// Convert list parameters into a task filter.
    ///
    /// ```rust
    /// use tally_core::{models::{Priority, TaskFilter}, params::ListTasks};
    ///
    /// let params = ListTasks {
    ///     query: Some("  ".to_string()),
    ///     priority: Some("HIGH".to_string()),
    ///     hide_completed: true,
    /// };
    /// let filter = TaskFilter::try_from(&params)?;
    /// assert_eq!(filter.query, None);
    /// assert_eq!(filter.priority, Some(Priority::High));
    /// assert!(!filter.include_completed);
    /// # Ok::<(), tally_core::TrackerError>(())
    /// ```
    fn try_from(params: &ListTasks) -> Result<Self> {
        Ok(Self {
            query: non_blank(params.query.as_ref()),
            priority: parse_priority(params.priority.as_deref())?,
            include_completed: !params.hide_completed,
        })
    }
}

impl TryFrom<&ListBookmarks> for BookmarkFilter {
    type Error = TrackerError;

    fn try_from(params: &ListBookmarks) -> Result<Self> {
        let sort = match params.sort.as_deref().map(str::trim) {
            None | Some("") => BookmarkSort::default(),
            Some(s) => s.parse::<BookmarkSort>().map_err(|_| {
                TrackerError::invalid_input("sort")
                    .with_reason(format!("Invalid sort: {s}. Must be 'new', 'clicks', or 'title'"))
            })?,
        };

        Ok(Self {
            query: non_blank(params.query.as_ref()),
            tag: non_blank(params.tag.as_ref()).map(|t| t.to_lowercase()),
            favorites_only: params.favorites,
            sort,
        })
    }
}
