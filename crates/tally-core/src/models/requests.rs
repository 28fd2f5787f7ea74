//! Validated request types for creating and updating models.
//!
//! Each type is produced from its string-based counterpart in
//! [`crate::params`] through `TryFrom`, so the storage layer only ever sees
//! checked values.

use jiff::civil::Date;

use super::{Cadence, Priority};
use crate::{
    error::{Result, TrackerError},
    params::{
        self, optional_text, parse_optional_date, parse_tags, required_text, validate_url,
        BOOKMARK_TITLE_MAX, HABIT_NAME_MAX, NOTES_MAX, TASK_TITLE_MAX,
    },
};

/// A task ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub notes: Option<String>,
    pub due_date: Option<Date>,
    pub priority: Priority,
}

/// Field changes for a task. `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub notes: Option<Option<String>>,
    pub due_date: Option<Option<Date>>,
    pub priority: Option<Priority>,
    pub completed: Option<bool>,
}

/// A habit ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewHabit {
    pub name: String,
    pub description: Option<String>,
    pub cadence: Cadence,
}

/// Field changes for a habit. Streak state is deliberately absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HabitChanges {
    pub name: Option<String>,
    pub description: Option<Option<String>>,
    pub cadence: Option<Cadence>,
}

/// A bookmark ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookmark {
    pub title: String,
    pub url: String,
    pub notes: Option<String>,
    pub favorite: bool,
    pub tags: Vec<String>,
}

/// Field changes for a bookmark. `tags: Some(..)` replaces the tag set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookmarkChanges {
    pub title: Option<String>,
    pub url: Option<String>,
    pub notes: Option<Option<String>>,
    pub favorite: Option<bool>,
    pub tags: Option<Vec<String>>,
}

/// Blank values count as absent.
pub(crate) fn parse_priority(value: Option<&str>) -> Result<Option<Priority>> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Priority>().map_err(|_| {
                TrackerError::invalid_input("priority").with_reason(format!(
                    "Invalid priority: {s}. Must be 'low', 'normal', or 'high'"
                ))
            })
        })
        .transpose()
}

/// Blank values count as absent.
pub(crate) fn parse_cadence(value: Option<&str>) -> Result<Option<Cadence>> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<Cadence>().map_err(|_| {
                TrackerError::invalid_input("cadence")
                    .with_reason(format!("Invalid cadence: {s}. Must be 'daily' or 'weekly'"))
            })
        })
        .transpose()
}

impl TryFrom<&params::CreateTask> for NewTask {
    type Error = TrackerError;

    fn try_from(params: &params::CreateTask) -> Result<Self> {
        Ok(Self {
            title: required_text("title", &params.title, TASK_TITLE_MAX)?,
            notes: optional_text("notes", params.notes.as_deref(), NOTES_MAX)?,
            due_date: parse_optional_date("due_date", params.due_date.as_deref())?,
            priority: parse_priority(params.priority.as_deref())?.unwrap_or_default(),
        })
    }
}

impl TryFrom<&params::UpdateTask> for TaskChanges {
    type Error = TrackerError;

    fn try_from(params: &params::UpdateTask) -> Result<Self> {
        Ok(Self {
            title: params
                .title
                .as_deref()
                .map(|t| required_text("title", t, TASK_TITLE_MAX))
                .transpose()?,
            notes: params
                .notes
                .as_deref()
                .map(|n| optional_text("notes", Some(n), NOTES_MAX))
                .transpose()?,
            due_date: params
                .due_date
                .as_deref()
                .map(|d| parse_optional_date("due_date", Some(d)))
                .transpose()?,
            priority: parse_priority(params.priority.as_deref())?,
            completed: params.completed,
        })
    }
}

impl TryFrom<&params::CreateHabit> for NewHabit {
    type Error = TrackerError;

    fn try_from(params: &params::CreateHabit) -> Result<Self> {
        Ok(Self {
            name: required_text("name", &params.name, HABIT_NAME_MAX)?,
            description: optional_text("description", params.description.as_deref(), NOTES_MAX)?,
            cadence: parse_cadence(params.cadence.as_deref())?.unwrap_or_default(),
        })
    }
}

impl TryFrom<&params::UpdateHabit> for HabitChanges {
    type Error = TrackerError;

    fn try_from(params: &params::UpdateHabit) -> Result<Self> {
        Ok(Self {
            name: params
                .name
                .as_deref()
                .map(|n| required_text("name", n, HABIT_NAME_MAX))
                .transpose()?,
            description: params
                .description
                .as_deref()
                .map(|d| optional_text("description", Some(d), NOTES_MAX))
                .transpose()?,
            cadence: parse_cadence(params.cadence.as_deref())?,
        })
    }
}

impl TryFrom<&params::CreateBookmark> for NewBookmark {
    type Error = TrackerError;

    fn try_from(params: &params::CreateBookmark) -> Result<Self> {
        Ok(Self {
            title: required_text("title", &params.title, BOOKMARK_TITLE_MAX)?,
            url: validate_url(&params.url)?,
            notes: optional_text("notes", params.notes.as_deref(), NOTES_MAX)?,
            favorite: params.favorite,
            tags: params
                .tags
                .as_deref()
                .map(parse_tags)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

impl TryFrom<&params::UpdateBookmark> for BookmarkChanges {
    type Error = TrackerError;

    fn try_from(params: &params::UpdateBookmark) -> Result<Self> {
        Ok(Self {
            title: params
                .title
                .as_deref()
                .map(|t| required_text("title", t, BOOKMARK_TITLE_MAX))
                .transpose()?,
            url: params.url.as_deref().map(validate_url).transpose()?,
            notes: params
                .notes
                .as_deref()
                .map(|n| optional_text("notes", Some(n), NOTES_MAX))
                .transpose()?,
            favorite: params.favorite,
            tags: params.tags.as_deref().map(parse_tags).transpose()?,
        })
    }
}
