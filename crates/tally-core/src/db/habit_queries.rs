//! Habit CRUD operations and streak persistence.

use jiff::civil::Date;
use rusqlite::{params, Connection, OptionalExtension};

use super::{count_column, optional_date_column, parsed_column};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Habit, HabitChanges, NewHabit},
    streak,
};

const HABIT_COLUMNS: &str = "id, name, description, cadence, streak, best_streak, last_done_date";
const INSERT_HABIT_SQL: &str =
    "INSERT INTO habits (name, description, cadence, streak, best_streak) VALUES (?1, ?2, ?3, 0, 0)";
const UPDATE_HABIT_DETAILS_SQL: &str =
    "UPDATE habits SET name = ?1, description = ?2, cadence = ?3 WHERE id = ?4";
const UPDATE_HABIT_STREAK_SQL: &str =
    "UPDATE habits SET streak = ?1, best_streak = ?2, last_done_date = ?3 WHERE id = ?4";
const DELETE_HABIT_SQL: &str = "DELETE FROM habits WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Habit from a database row
    fn build_habit_from_row(row: &rusqlite::Row) -> rusqlite::Result<Habit> {
        Ok(Habit {
            id: row.get::<_, i64>(0)? as u64,
            name: row.get(1)?,
            description: row.get(2)?,
            cadence: parsed_column(row, 3, "cadence")?,
            streak: count_column(row, 4)?,
            best_streak: count_column(row, 5)?,
            last_done: optional_date_column(row, 6)?,
        })
    }

    fn select_habit(connection: &Connection, id: u64) -> Result<Option<Habit>> {
        connection
            .query_row(
                &format!("SELECT {HABIT_COLUMNS} FROM habits WHERE id = ?1"),
                params![id as i64],
                Self::build_habit_from_row,
            )
            .optional()
            .db_context("Failed to query habit")
    }

    /// Creates a habit that has never been checked in.
    pub fn create_habit(&mut self, habit: &NewHabit) -> Result<Habit> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_HABIT_SQL,
            params![habit.name, habit.description, habit.cadence.as_str()],
        )
        .db_context("Failed to insert habit")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Habit {
            description: habit.description.clone(),
            ..Habit::new(id, habit.name.clone(), habit.cadence)
        })
    }

    /// Retrieves a habit by its ID.
    pub fn get_habit(&self, id: u64) -> Result<Option<Habit>> {
        Self::select_habit(&self.connection, id)
    }

    /// Lists habits, longest running streak first.
    pub fn list_habits(&self, limit: Option<usize>) -> Result<Vec<Habit>> {
        let mut query = format!("SELECT {HABIT_COLUMNS} FROM habits ORDER BY streak DESC, id ASC");
        if let Some(limit) = limit {
            query.push_str(&format!(" LIMIT {limit}"));
        }

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], Self::build_habit_from_row)
            .db_context("Failed to query habits")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch habits")?;

        Ok(rows)
    }

    /// Edits a habit's name, description or cadence. Streak state is left
    /// as it is.
    pub fn update_habit(&mut self, id: u64, changes: &HabitChanges) -> Result<Option<Habit>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(mut habit) = Self::select_habit(&tx, id)? else {
            return Ok(None);
        };

        if let Some(ref name) = changes.name {
            habit.name = name.clone();
        }
        if let Some(ref description) = changes.description {
            habit.description = description.clone();
        }
        if let Some(cadence) = changes.cadence {
            habit.cadence = cadence;
        }

        tx.execute(
            UPDATE_HABIT_DETAILS_SQL,
            params![
                habit.name,
                habit.description,
                habit.cadence.as_str(),
                id as i64
            ],
        )
        .db_context("Failed to update habit")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(habit))
    }

    fn write_streak(connection: &Connection, habit: &Habit) -> Result<()> {
        let rows = connection
            .execute(
                UPDATE_HABIT_STREAK_SQL,
                params![
                    i64::from(habit.streak),
                    i64::from(habit.best_streak),
                    habit.last_done.map(|d| d.to_string()),
                    habit.id as i64
                ],
            )
            .db_context("Failed to save habit streak")?;

        if rows == 0 {
            return Err(TrackerError::HabitNotFound { id: habit.id });
        }
        Ok(())
    }

    /// Persists the streak fields of `habit`.
    pub fn save_streak(&mut self, habit: &Habit) -> Result<()> {
        Self::write_streak(&self.connection, habit)
    }

    /// Checks in a habit on `as_of` inside one transaction.
    ///
    /// Returns the habit as it stands afterwards and whether the check-in was
    /// accepted, or `None` if the habit doesn't exist. Nothing is written
    /// when the period already has a check-in.
    pub fn check_in_habit(&mut self, id: u64, as_of: Date) -> Result<Option<(Habit, bool)>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(mut habit) = Self::select_habit(&tx, id)? else {
            return Ok(None);
        };

        let changed = streak::check_in(&mut habit, as_of);
        if changed {
            Self::write_streak(&tx, &habit)?;
        }

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some((habit, changed)))
    }

    /// Permanently deletes a habit.
    pub fn delete_habit(&mut self, id: u64) -> Result<()> {
        let rows = self
            .connection
            .execute(DELETE_HABIT_SQL, params![id as i64])
            .db_context("Failed to delete habit")?;

        if rows == 0 {
            return Err(TrackerError::HabitNotFound { id });
        }
        Ok(())
    }
}
