//! Bookmark and tag model definitions.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A saved link.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    /// Unique identifier for the bookmark
    pub id: u64,

    /// Display title
    pub title: String,

    /// Absolute http(s) URL
    pub url: String,

    /// Free-form notes
    pub notes: Option<String>,

    /// Favorites are listed before everything else
    pub favorite: bool,

    /// How many times the bookmark has been visited
    pub clicks: u32,

    /// Timestamp when the bookmark was created (UTC)
    pub created_at: Timestamp,

    /// Lowercase tag names, alphabetical
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// A tag name with the number of bookmarks carrying it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TagCount {
    pub name: String,
    pub count: u32,
}
