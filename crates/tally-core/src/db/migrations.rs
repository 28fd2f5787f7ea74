//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

/// Columns added after the first release, as `(table, column, definition)`.
const ADDED_COLUMNS: &[(&str, &str, &str)] = &[
    ("bookmarks", "clicks", "INTEGER NOT NULL DEFAULT 0"),
    ("habits", "best_streak", "INTEGER NOT NULL DEFAULT 0"),
];

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Bookmark tags rely on cascading deletes
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        for (table, column, definition) in ADDED_COLUMNS {
            if self.has_column(table, column)? {
                continue;
            }

            log::info!("Migrating database: adding {table}.{column}");
            self.connection
                .execute(
                    &format!("ALTER TABLE {table} ADD COLUMN {column} {definition}"),
                    [],
                )
                .db_context(&format!("Failed to add {column} column to {table} table"))?;

            if (*table, *column) == ("habits", "best_streak") {
                // Seed from the running streak so best >= streak holds
                self.connection
                    .execute("UPDATE habits SET best_streak = streak", [])
                    .db_context("Failed to seed best_streak")?;
            }
        }

        Ok(())
    }

    fn has_column(&self, table: &str, column: &str) -> Result<bool> {
        self.connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info(?1) WHERE name = ?2",
                [table, column],
                |row| row.get::<_, i64>(0),
            )
            .map(|count| count > 0)
            .db_context("Failed to inspect table columns")
    }
}
