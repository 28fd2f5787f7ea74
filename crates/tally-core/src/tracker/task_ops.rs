//! Task operations for the Tracker.

use log::debug;

use super::Tracker;
use crate::{
    display::{Tasks, UpdateResult},
    error::{Result, TrackerError},
    models::{NewTask, Task, TaskChanges, TaskFilter},
    params::{CreateTask, Delete, Id, ListTasks, UpdateTask},
};

/// Human-readable summary of the requested changes.
fn describe_changes(changes: &TaskChanges, before: &Task, after: &Task) -> Vec<String> {
    let mut described = Vec::new();
    if changes.title.is_some() {
        described.push("Updated title".to_string());
    }
    if let Some(ref notes) = changes.notes {
        described.push(if notes.is_some() { "Updated notes" } else { "Cleared notes" }.to_string());
    }
    if let Some(due) = changes.due_date {
        described.push(match due {
            Some(date) => format!("Set due date to {date}"),
            None => "Cleared due date".to_string(),
        });
    }
    if let Some(priority) = changes.priority {
        described.push(format!("Set priority to {priority}"));
    }
    if before.completed != after.completed {
        described.push(
            if after.completed { "Marked as completed" } else { "Reopened" }.to_string(),
        );
    }
    described
}

impl Tracker {
    /// Creates a new task.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` if the title is blank or too
    /// long, the due date isn't `YYYY-MM-DD`, or the priority is unknown.
    pub async fn create_task(&self, params: &CreateTask) -> Result<Task> {
        let task = NewTask::try_from(params)?;
        debug!("Creating task '{}'", task.title);
        self.with_database(move |db| db.create_task(&task)).await
    }

    /// Retrieves a task by its ID.
    pub async fn get_task(&self, params: &Id) -> Result<Option<Task>> {
        let id = params.id;
        self.with_database(move |db| db.get_task(id)).await
    }

    /// Lists tasks: open tasks first, then by due date.
    pub async fn list_tasks(&self, params: &ListTasks) -> Result<Tasks> {
        let filter = TaskFilter::try_from(params)?;
        debug!("Listing tasks with {filter:?}");
        let tasks = self.with_database(move |db| db.list_tasks(&filter)).await?;
        Ok(Tasks(tasks))
    }

    /// Applies the given field changes to a task.
    ///
    /// Setting `completed` stamps or clears the completion time when the
    /// state actually changes.
    pub async fn update_task(&self, params: &UpdateTask) -> Result<UpdateResult<Task>> {
        let id = params.id;
        let changes = TaskChanges::try_from(params)?;
        debug!("Updating task {id}");

        let (before, after, changes) = self
            .with_database(move |db| {
                let before = db.get_task(id)?.ok_or(TrackerError::TaskNotFound { id })?;
                let after = db
                    .update_task(id, &changes)?
                    .ok_or(TrackerError::TaskNotFound { id })?;
                Ok((before, after, changes))
            })
            .await?;

        let described = describe_changes(&changes, &before, &after);
        Ok(UpdateResult::with_changes(after, described))
    }

    /// Flips a task between open and completed.
    pub async fn toggle_task(&self, params: &Id) -> Result<Task> {
        let id = params.id;
        let task = self
            .with_database(move |db| db.toggle_task(id))
            .await?
            .ok_or(TrackerError::TaskNotFound { id })?;

        debug!("Task {id} is now {}", if task.completed { "completed" } else { "open" });
        Ok(task)
    }

    /// Permanently deletes a task, returning it for confirmation.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::InvalidInput` unless `confirmed` is set, and
    /// `TrackerError::TaskNotFound` if the task doesn't exist.
    pub async fn delete_task(&self, params: &Delete) -> Result<Task> {
        params.ensure_confirmed("Task")?;
        let id = params.id;

        self.with_database(move |db| {
            let task = db.get_task(id)?.ok_or(TrackerError::TaskNotFound { id })?;
            db.delete_task(id)?;
            Ok(task)
        })
        .await
    }
}
