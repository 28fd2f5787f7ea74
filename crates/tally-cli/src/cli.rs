//! Command handlers for the terminal interface.
//!
//! Every handler converts its clap arguments into core parameters, calls the
//! [`Tracker`], and renders the core `Display` output. The MCP server renders
//! the same types, so both interfaces print identical text.

use anyhow::{anyhow, Context, Result};
use tally_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    params::{Id, ListBookmarks, ListTasks, ShowDashboard},
    Tracker,
};

use crate::{
    args::{BookmarkCommands, HabitCommands, TaskCommands},
    renderer::TerminalRenderer,
};

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        match command {
            TaskCommands::Add(args) => {
                let task = self
                    .tracker
                    .create_task(&args.into())
                    .await
                    .context("Failed to create task")?;
                self.renderer.render(&CreateResult::new(task).to_string())
            }
            TaskCommands::List(args) => self.list_tasks(&args.into()).await,
            TaskCommands::Show(args) => {
                let params: Id = args.into();
                let task = self
                    .tracker
                    .get_task(&params)
                    .await
                    .context("Failed to get task")?
                    .ok_or_else(|| anyhow!("Task with ID {} not found", params.id))?;
                self.renderer.render(&task.to_string())
            }
            TaskCommands::Edit(args) => {
                let result = self
                    .tracker
                    .update_task(&args.into())
                    .await
                    .context("Failed to update task")?;
                self.renderer.render(&result.to_string())
            }
            TaskCommands::Toggle(args) => {
                let task = self
                    .tracker
                    .toggle_task(&args.into())
                    .await
                    .context("Failed to toggle task")?;
                let status = if task.completed {
                    OperationStatus::success(format!("Marked '{}' as completed", task.title))
                } else {
                    OperationStatus::success(format!("Reopened '{}'", task.title))
                };
                self.renderer.render(&status.to_string())
            }
            TaskCommands::Delete(args) => {
                let task = self
                    .tracker
                    .delete_task(&args.into())
                    .await
                    .context("Failed to delete task")?;
                self.renderer.render(&DeleteResult::new(task).to_string())
            }
        }
    }

    pub async fn list_tasks(&self, params: &ListTasks) -> Result<()> {
        let tasks = self
            .tracker
            .list_tasks(params)
            .await
            .context("Failed to list tasks")?;
        self.renderer.render(&format!("# Tasks\n\n{tasks}"))
    }

    pub async fn handle_habit_command(&self, command: HabitCommands) -> Result<()> {
        match command {
            HabitCommands::Add(args) => {
                let habit = self
                    .tracker
                    .create_habit(&args.into())
                    .await
                    .context("Failed to create habit")?;
                self.renderer.render(&CreateResult::new(habit).to_string())
            }
            HabitCommands::List => {
                let habits = self
                    .tracker
                    .list_habits()
                    .await
                    .context("Failed to list habits")?;
                self.renderer.render(&format!("# Habits\n\n{habits}"))
            }
            HabitCommands::Show(args) => {
                let params: Id = args.into();
                let habit = self
                    .tracker
                    .get_habit(&params)
                    .await
                    .context("Failed to get habit")?
                    .ok_or_else(|| anyhow!("Habit with ID {} not found", params.id))?;
                self.renderer.render(&habit.to_string())
            }
            HabitCommands::Edit(args) => {
                let result = self
                    .tracker
                    .update_habit(&args.into())
                    .await
                    .context("Failed to update habit")?;
                self.renderer.render(&result.to_string())
            }
            HabitCommands::CheckIn(args) => {
                let outcome = self
                    .tracker
                    .check_in_habit(&args.into())
                    .await
                    .context("Failed to check in habit")?;
                self.renderer.render(&outcome.to_string())
            }
            HabitCommands::Delete(args) => {
                let habit = self
                    .tracker
                    .delete_habit(&args.into())
                    .await
                    .context("Failed to delete habit")?;
                self.renderer.render(&DeleteResult::new(habit).to_string())
            }
        }
    }

    pub async fn handle_bookmark_command(&self, command: BookmarkCommands) -> Result<()> {
        match command {
            BookmarkCommands::Add(args) => {
                let bookmark = self
                    .tracker
                    .create_bookmark(&args.into())
                    .await
                    .context("Failed to create bookmark")?;
                self.renderer.render(&CreateResult::new(bookmark).to_string())
            }
            BookmarkCommands::List(args) => {
                let params: ListBookmarks = args.into();
                let bookmarks = self
                    .tracker
                    .list_bookmarks(&params)
                    .await
                    .context("Failed to list bookmarks")?;
                self.renderer.render(&format!("# Bookmarks\n\n{bookmarks}"))
            }
            BookmarkCommands::Show(args) => {
                let params: Id = args.into();
                let bookmark = self
                    .tracker
                    .get_bookmark(&params)
                    .await
                    .context("Failed to get bookmark")?
                    .ok_or_else(|| anyhow!("Bookmark with ID {} not found", params.id))?;
                self.renderer.render(&bookmark.to_string())
            }
            BookmarkCommands::Edit(args) => {
                let result = self
                    .tracker
                    .update_bookmark(&args.into())
                    .await
                    .context("Failed to update bookmark")?;
                self.renderer.render(&result.to_string())
            }
            BookmarkCommands::Visit(args) => {
                let bookmark = self
                    .tracker
                    .visit_bookmark(&args.into())
                    .await
                    .context("Failed to visit bookmark")?;
                let status = OperationStatus::success(format!(
                    "Visited '{}' (clicks: {})",
                    bookmark.title, bookmark.clicks
                ));
                self.renderer.render(&format!("{status}{}\n", bookmark.url))
            }
            BookmarkCommands::Favorite(args) => {
                let bookmark = self
                    .tracker
                    .toggle_favorite(&args.into())
                    .await
                    .context("Failed to toggle favorite")?;
                let status = if bookmark.favorite {
                    OperationStatus::success(format!("Added '{}' to favorites", bookmark.title))
                } else {
                    OperationStatus::success(format!(
                        "Removed '{}' from favorites",
                        bookmark.title
                    ))
                };
                self.renderer.render(&status.to_string())
            }
            BookmarkCommands::Delete(args) => {
                let bookmark = self
                    .tracker
                    .delete_bookmark(&args.into())
                    .await
                    .context("Failed to delete bookmark")?;
                self.renderer.render(&DeleteResult::new(bookmark).to_string())
            }
            BookmarkCommands::Tags => {
                let tags = self
                    .tracker
                    .list_tags()
                    .await
                    .context("Failed to list tags")?;
                self.renderer.render(&format_tags(&tags))
            }
        }
    }

    pub async fn show_dashboard(&self, params: &ShowDashboard) -> Result<()> {
        let dashboard = self
            .tracker
            .dashboard(params)
            .await
            .context("Failed to build dashboard")?;
        self.renderer.render(&dashboard.to_string())
    }
}

pub(crate) fn format_tags(tags: &[String]) -> String {
    if tags.is_empty() {
        return "No tags yet.\n".to_string();
    }
    let mut output = String::from("# Tags\n\n");
    for tag in tags {
        output.push_str(&format!("- #{tag}\n"));
    }
    output
}
