//! Database operations and SQLite management for tasks, habits and bookmarks.
//!
//! This module provides the low-level storage layer. It owns the SQLite
//! connection, applies the embedded schema, and exposes one query module per
//! resource. All methods are synchronous; the async [`crate::Tracker`] facade
//! runs them on blocking threads.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{functions::FunctionFlags, types::Type, Connection};

use crate::error::{DatabaseResultExt, Result};

pub mod bookmark_queries;
pub mod dashboard_queries;
pub mod habit_queries;
pub mod migrations;
pub mod task_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;
        register_functions(&connection)?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

/// Read a column holding an RFC 3339 timestamp.
pub(crate) fn timestamp_column(row: &rusqlite::Row, index: usize) -> rusqlite::Result<Timestamp> {
    row.get::<_, String>(index)?
        .parse::<Timestamp>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

/// Read a nullable column holding an RFC 3339 timestamp.
pub(crate) fn optional_timestamp_column(
    row: &rusqlite::Row,
    index: usize,
) -> rusqlite::Result<Option<Timestamp>> {
    row.get::<_, Option<String>>(index)?
        .map(|s| {
            s.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

/// Read a nullable column holding a `YYYY-MM-DD` date.
pub(crate) fn optional_date_column(
    row: &rusqlite::Row,
    index: usize,
) -> rusqlite::Result<Option<jiff::civil::Date>> {
    row.get::<_, Option<String>>(index)?
        .map(|s| {
            s.parse::<jiff::civil::Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e))
            })
        })
        .transpose()
}

/// Read a text column through `FromStr`, reporting unknown values as
/// conversion failures.
pub(crate) fn parsed_column<T: std::str::FromStr>(
    row: &rusqlite::Row,
    index: usize,
    what: &str,
) -> rusqlite::Result<T> {
    let value: String = row.get(index)?;
    value.parse::<T>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            index,
            Type::Text,
            format!("Invalid {what}: {value}").into(),
        )
    })
}

/// Read a non-negative counter column, saturating at `u32::MAX`.
pub(crate) fn count_column(row: &rusqlite::Row, index: usize) -> rusqlite::Result<u32> {
    let value: i64 = row.get(index)?;
    Ok(u32::try_from(value.max(0)).unwrap_or(u32::MAX))
}

/// Name of the SQL function folding text to lowercase with full Unicode
/// rules. SQLite's own `lower()` and `LIKE` only fold ASCII.
const FOLD_CASE_FN: &str = "fold_case";

fn register_functions(connection: &Connection) -> Result<()> {
    connection
        .create_scalar_function(
            FOLD_CASE_FN,
            1,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let text: Option<String> = ctx.get(0)?;
                Ok(text.map(|t| t.to_lowercase()))
            },
        )
        .db_context("Failed to register fold_case function")
}

/// Build a case-folded `LIKE` pattern matching `text` anywhere, with
/// wildcards escaped. Compare it against `fold_case(column)` with
/// `ESCAPE '\'`.
pub(crate) fn contains_pattern(text: &str) -> String {
    let escaped = text
        .to_lowercase()
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
