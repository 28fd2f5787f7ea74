//! Parameter structures for tally operations
//!
//! This module contains shared parameter structures used by every interface
//! (CLI, MCP) without framework-specific derives beyond serde. Values arrive
//! here as plain strings and are validated into typed requests in
//! [`crate::models::requests`] and [`crate::models::filters`].
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap these types, add their own derives, and convert with
//! `.into()`. JSON schema generation is only compiled in with the `schema`
//! feature.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use jiff::civil::Date;

use crate::error::{Result, TrackerError};

/// Maximum length of a task title.
pub const TASK_TITLE_MAX: usize = 120;
/// Maximum length of a habit name.
pub const HABIT_NAME_MAX: usize = 80;
/// Maximum length of a bookmark title.
pub const BOOKMARK_TITLE_MAX: usize = 160;
/// Maximum length of a bookmark URL.
pub const URL_MAX: usize = 2048;
/// Maximum length of notes and descriptions.
pub const NOTES_MAX: usize = 2000;
/// Maximum length of a tag name.
pub const TAG_NAME_MAX: usize = 40;

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: u64,
}

/// Parameters for permanently deleting a resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Delete {
    /// The ID of the resource to delete
    pub id: u64,
    /// Must be true; deletion cannot be undone
    #[serde(default)]
    pub confirmed: bool,
}

impl Delete {
    pub(crate) fn ensure_confirmed(&self, resource: &str) -> Result<()> {
        if self.confirmed {
            Ok(())
        } else {
            Err(TrackerError::invalid_input("confirmed").with_reason(format!(
                "{resource} deletion requires explicit confirmation. Set 'confirmed' to true to proceed with permanent deletion."
            )))
        }
    }
}

/// Parameters for creating a task.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateTask {
    /// Title of the task (required, up to 120 characters)
    pub title: String,
    /// Optional notes
    pub notes: Option<String>,
    /// Optional due date (YYYY-MM-DD)
    pub due_date: Option<String>,
    /// Priority: 'low', 'normal' (default) or 'high'
    pub priority: Option<String>,
}

/// Parameters for listing tasks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListTasks {
    /// Only tasks whose title or notes contain this text
    pub query: Option<String>,
    /// Only tasks with this priority
    pub priority: Option<String>,
    /// Leave completed tasks out of the list
    #[serde(default)]
    pub hide_completed: bool,
}

/// Parameters for updating a task. Omitted fields are left unchanged; an
/// empty string clears `notes` or `due_date`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateTask {
    /// Task ID to update (required)
    pub id: u64,
    pub title: Option<String>,
    pub notes: Option<String>,
    /// New due date (YYYY-MM-DD), or empty to clear
    pub due_date: Option<String>,
    /// 'low', 'normal' or 'high'
    pub priority: Option<String>,
    /// Mark the task completed or reopen it
    pub completed: Option<bool>,
}

/// Parameters for creating a habit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateHabit {
    /// Name of the habit (required, up to 80 characters)
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// 'daily' (default) or 'weekly'
    pub cadence: Option<String>,
}

/// Parameters for editing a habit. Streak fields cannot be edited.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateHabit {
    /// Habit ID to update (required)
    pub id: u64,
    pub name: Option<String>,
    /// New description, or empty to clear
    pub description: Option<String>,
    /// 'daily' or 'weekly'
    pub cadence: Option<String>,
}

/// Parameters for checking in a habit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CheckIn {
    /// Habit ID to check in
    pub id: u64,
    /// Date of the check-in (YYYY-MM-DD); defaults to today in UTC
    pub date: Option<String>,
}

impl CheckIn {
    /// Parse the optional check-in date.
    pub fn as_of(&self) -> Result<Option<Date>> {
        parse_optional_date("date", self.date.as_deref())
    }
}

/// Parameters for creating a bookmark.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CreateBookmark {
    /// Title of the bookmark (required, up to 160 characters)
    pub title: String,
    /// Absolute http(s) URL (required)
    pub url: String,
    /// Optional notes
    pub notes: Option<String>,
    /// Mark as favorite
    #[serde(default)]
    pub favorite: bool,
    /// Comma-separated tags
    pub tags: Option<String>,
}

/// Parameters for listing bookmarks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ListBookmarks {
    /// Only bookmarks whose title, notes or URL contain this text
    pub query: Option<String>,
    /// Only bookmarks carrying this tag
    pub tag: Option<String>,
    /// Only favorites
    #[serde(default)]
    pub favorites: bool,
    /// 'new' (default), 'clicks' or 'title'
    pub sort: Option<String>,
}

/// Parameters for updating a bookmark. Providing `tags` replaces the whole tag
/// set; an empty string removes all tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct UpdateBookmark {
    /// Bookmark ID to update (required)
    pub id: u64,
    pub title: Option<String>,
    pub url: Option<String>,
    /// New notes, or empty to clear
    pub notes: Option<String>,
    pub favorite: Option<bool>,
    /// Comma-separated tags replacing the current ones
    pub tags: Option<String>,
}

/// Parameters for the dashboard overview.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct ShowDashboard {
    /// Reference date (YYYY-MM-DD); defaults to today in UTC
    pub date: Option<String>,
}

impl ShowDashboard {
    pub fn as_of(&self) -> Result<Option<Date>> {
        parse_optional_date("date", self.date.as_deref())
    }
}

/// Validate a required single-line text field and return it trimmed.
pub(crate) fn required_text(field: &str, value: &str, max: usize) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::invalid_input(field).with_reason("must not be empty"));
    }
    check_length(field, trimmed, max)?;
    Ok(trimmed.to_string())
}

/// Validate optional free text. Blank text becomes `None`.
pub(crate) fn optional_text(field: &str, value: Option<&str>, max: usize) -> Result<Option<String>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => {
            check_length(field, text, max)?;
            Ok(Some(text.to_string()))
        }
    }
}

fn check_length(field: &str, value: &str, max: usize) -> Result<()> {
    let len = value.chars().count();
    if len > max {
        return Err(TrackerError::invalid_input(field)
            .with_reason(format!("must be at most {max} characters (got {len})")));
    }
    Ok(())
}

/// Parse an optional `YYYY-MM-DD` date. Blank input becomes `None`.
pub(crate) fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<Date>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => text.parse::<Date>().map(Some).map_err(|e| {
            TrackerError::invalid_input(field)
                .with_reason(format!("'{text}' is not a valid YYYY-MM-DD date: {e}"))
        }),
    }
}

/// Validate a bookmark URL: absolute, http or https, bounded length.
pub(crate) fn validate_url(value: &str) -> Result<String> {
    let trimmed = required_text("url", value, URL_MAX)?;
    let parsed = url::Url::parse(&trimmed).map_err(|e| {
        TrackerError::invalid_input("url").with_reason(format!("'{trimmed}' is not a valid URL: {e}"))
    })?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed),
        scheme => Err(TrackerError::invalid_input("url")
            .with_reason(format!("unsupported scheme '{scheme}', expected http or https"))),
    }
}

/// Split comma-separated tags into unique, lowercase, non-empty names in
/// first-seen order.
///
/// ```rust
/// use tally_core::params::parse_tags;
///
/// let tags = parse_tags(" Rust, web,,RUST , Tools ")?;
/// assert_eq!(tags, vec!["rust", "web", "tools"]);
/// # Ok::<(), tally_core::TrackerError>(())
/// ```
pub fn parse_tags(csv: &str) -> Result<Vec<String>> {
    let mut names: Vec<String> = Vec::new();
    for name in csv.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let name = name.to_lowercase();
        check_length("tags", &name, TAG_NAME_MAX)?;
        if !names.contains(&name) {
            names.push(name);
        }
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_trims() {
        assert_eq!(required_text("title", "  Read  ", 10).unwrap(), "Read");
    }

    #[test]
    fn test_required_text_rejects_blank() {
        let err = required_text("title", "   ", 10).unwrap_err();
        match err {
            TrackerError::InvalidInput { field, reason } => {
                assert_eq!(field, "title");
                assert!(reason.contains("must not be empty"));
            }
            _ => panic!("Expected InvalidInput error"),
        }
    }

    #[test]
    fn test_required_text_counts_characters_not_bytes() {
        assert!(required_text("name", "ééééé", 5).is_ok());
        assert!(required_text("name", "éééééé", 5).is_err());
    }

    #[test]
    fn test_optional_text_blank_is_none() {
        assert_eq!(optional_text("notes", Some("  "), 10).unwrap(), None);
        assert_eq!(optional_text("notes", None, 10).unwrap(), None);
        assert_eq!(
            optional_text("notes", Some(" hi "), 10).unwrap(),
            Some("hi".to_string())
        );
    }

    #[test]
    fn test_parse_optional_date() {
        assert_eq!(
            parse_optional_date("due_date", Some("2024-02-29")).unwrap(),
            Some(jiff::civil::date(2024, 2, 29))
        );
        assert_eq!(parse_optional_date("due_date", Some("")).unwrap(), None);
        assert!(parse_optional_date("due_date", Some("2023-02-29")).is_err());
        assert!(parse_optional_date("due_date", Some("tomorrow")).is_err());
    }

    #[test]
    fn test_validate_url() {
        assert!(validate_url("https://example.com/docs").is_ok());
        assert!(validate_url("http://localhost:8080").is_ok());
        assert!(validate_url("example.com").is_err());
        assert!(validate_url("ftp://example.com").is_err());
        assert!(validate_url("").is_err());
    }

    #[test]
    fn test_parse_tags_normalizes() {
        assert_eq!(
            parse_tags("Rust, rust ,  ,Web").unwrap(),
            vec!["rust".to_string(), "web".to_string()]
        );
        assert!(parse_tags("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_tags_rejects_long_names() {
        let long = "x".repeat(TAG_NAME_MAX + 1);
        assert!(parse_tags(&long).is_err());
    }

    #[test]
    fn test_check_in_as_of() {
        let params = CheckIn {
            id: 1,
            date: Some("2024-01-10".to_string()),
        };
        assert_eq!(params.as_of().unwrap(), Some(jiff::civil::date(2024, 1, 10)));

        let params = CheckIn { id: 1, date: None };
        assert_eq!(params.as_of().unwrap(), None);
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let params = Delete {
            id: 3,
            confirmed: false,
        };
        let err = params.ensure_confirmed("Task").unwrap_err();
        assert!(err.to_string().contains("requires explicit confirmation"));

        let params = Delete {
            id: 3,
            confirmed: true,
        };
        assert!(params.ensure_confirmed("Task").is_ok());
    }
}
