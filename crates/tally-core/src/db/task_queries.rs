//! Task CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, Connection, OptionalExtension};

use super::{
    contains_pattern, optional_date_column, optional_timestamp_column, parsed_column,
    timestamp_column,
};
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{NewTask, Task, TaskChanges, TaskFilter},
};

const TASK_COLUMNS: &str =
    "id, title, notes, due_date, priority, is_completed, created_at, completed_at";
const INSERT_TASK_SQL: &str = "INSERT INTO tasks (title, notes, due_date, priority, is_completed, created_at) VALUES (?1, ?2, ?3, ?4, 0, ?5)";
const UPDATE_TASK_SQL: &str = "UPDATE tasks SET title = ?1, notes = ?2, due_date = ?3, priority = ?4, is_completed = ?5, completed_at = ?6 WHERE id = ?7";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE id = ?1";
const COUNT_OPEN_TASKS_SQL: &str = "SELECT COUNT(*) FROM tasks WHERE is_completed = 0";
const COMPLETION_DAYS_SQL: &str = "SELECT substr(COALESCE(completed_at, created_at), 1, 10) FROM tasks WHERE is_completed = 1 AND substr(COALESCE(completed_at, created_at), 1, 10) >= ?1";

impl super::Database {
    /// Helper function to construct a Task from a database row
    fn build_task_from_row(row: &rusqlite::Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get::<_, i64>(0)? as u64,
            title: row.get(1)?,
            notes: row.get(2)?,
            due_date: optional_date_column(row, 3)?,
            priority: parsed_column(row, 4, "priority")?,
            completed: row.get(5)?,
            created_at: timestamp_column(row, 6)?,
            completed_at: optional_timestamp_column(row, 7)?,
        })
    }

    fn select_task(connection: &Connection, id: u64) -> Result<Option<Task>> {
        connection
            .query_row(
                &format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = ?1"),
                params![id as i64],
                Self::build_task_from_row,
            )
            .optional()
            .db_context("Failed to query task")
    }

    fn write_task(connection: &Connection, task: &Task) -> Result<()> {
        connection
            .execute(
                UPDATE_TASK_SQL,
                params![
                    task.title,
                    task.notes,
                    task.due_date.map(|d| d.to_string()),
                    task.priority.as_str(),
                    task.completed,
                    task.completed_at.map(|t| t.to_string()),
                    task.id as i64,
                ],
            )
            .db_context("Failed to update task")?;
        Ok(())
    }

    /// Creates a new, incomplete task.
    pub fn create_task(&mut self, task: &NewTask) -> Result<Task> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();

        tx.execute(
            INSERT_TASK_SQL,
            params![
                task.title,
                task.notes,
                task.due_date.map(|d| d.to_string()),
                task.priority.as_str(),
                now.to_string(),
            ],
        )
        .db_context("Failed to insert task")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Task {
            id,
            title: task.title.clone(),
            notes: task.notes.clone(),
            due_date: task.due_date,
            priority: task.priority,
            completed: false,
            created_at: now,
            completed_at: None,
        })
    }

    /// Retrieves a task by its ID.
    pub fn get_task(&self, id: u64) -> Result<Option<Task>> {
        Self::select_task(&self.connection, id)
    }

    /// Lists tasks matching the filter.
    ///
    /// Open tasks come before completed ones; within each group tasks are
    /// ordered by due date (undated first), then by creation.
    pub fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>> {
        let mut query = format!("SELECT {TASK_COLUMNS} FROM tasks");

        let mut conditions = Vec::new();
        let mut params_vec: Vec<Box<dyn rusqlite::ToSql>> = Vec::new();

        if let Some(ref text) = filter.query {
            conditions.push("(fold_case(title) LIKE ? ESCAPE '\\' OR fold_case(IFNULL(notes, '')) LIKE ? ESCAPE '\\')");
            let pattern = contains_pattern(text);
            params_vec.push(Box::new(pattern.clone()));
            params_vec.push(Box::new(pattern));
        }

        if let Some(priority) = filter.priority {
            conditions.push("priority = ?");
            params_vec.push(Box::new(priority.as_str()));
        }

        if !filter.include_completed {
            conditions.push("is_completed = 0");
        }

        if !conditions.is_empty() {
            query.push_str(" WHERE ");
            query.push_str(&conditions.join(" AND "));
        }

        query.push_str(" ORDER BY is_completed ASC, due_date ASC, id ASC");

        let mut stmt = self
            .connection
            .prepare(&query)
            .db_context("Failed to prepare query")?;

        let params_refs: Vec<&dyn rusqlite::ToSql> = params_vec.iter().map(|b| &**b).collect();

        let rows = stmt
            .query_map(&params_refs[..], Self::build_task_from_row)
            .db_context("Failed to query tasks")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch tasks")?;

        Ok(rows)
    }

    /// Applies field changes to a task.
    ///
    /// Returns the updated task, or `None` if it doesn't exist. Completing a
    /// task stamps `completed_at`; reopening clears it.
    pub fn update_task(&mut self, id: u64, changes: &TaskChanges) -> Result<Option<Task>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(mut task) = Self::select_task(&tx, id)? else {
            return Ok(None);
        };

        if let Some(ref title) = changes.title {
            task.title = title.clone();
        }
        if let Some(ref notes) = changes.notes {
            task.notes = notes.clone();
        }
        if let Some(due_date) = changes.due_date {
            task.due_date = due_date;
        }
        if let Some(priority) = changes.priority {
            task.priority = priority;
        }
        if let Some(completed) = changes.completed {
            task.set_completed(completed, Timestamp::now());
        }

        Self::write_task(&tx, &task)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(task))
    }

    /// Flips a task between open and completed.
    pub fn toggle_task(&mut self, id: u64) -> Result<Option<Task>> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let Some(mut task) = Self::select_task(&tx, id)? else {
            return Ok(None);
        };

        let completed = !task.completed;
        task.set_completed(completed, Timestamp::now());

        Self::write_task(&tx, &task)?;
        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Some(task))
    }

    /// Permanently deletes a task.
    pub fn delete_task(&mut self, id: u64) -> Result<()> {
        let rows = self
            .connection
            .execute(DELETE_TASK_SQL, params![id as i64])
            .db_context("Failed to delete task")?;

        if rows == 0 {
            return Err(TrackerError::TaskNotFound { id });
        }
        Ok(())
    }

    /// Number of tasks not yet completed.
    pub fn count_open_tasks(&self) -> Result<u64> {
        self.connection
            .query_row(COUNT_OPEN_TASKS_SQL, [], |row| row.get::<_, i64>(0))
            .map(|count| count as u64)
            .db_context("Failed to count open tasks")
    }

    /// UTC completion day of every completed task on or after `since`, one
    /// entry per task. Tasks completed before completion times were recorded
    /// fall back to their creation time.
    pub fn completion_dates(&self, since: Date) -> Result<Vec<Date>> {
        let mut stmt = self
            .connection
            .prepare(COMPLETION_DAYS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map(params![since.to_string()], |row| parsed_column(row, 0, "date"))
            .db_context("Failed to query completion dates")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch completion dates")?;

        Ok(rows)
    }
}
