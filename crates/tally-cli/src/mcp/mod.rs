//! MCP server implementation for Tally
//!
//! Exposes the tracker operations as Model Context Protocol tools over stdio.
//! Tool results are the same markdown the terminal interface prints.


use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{
        CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
    },
    tool, tool_handler, tool_router, ErrorData, ServerHandler,
};
use tally_core::{
    display::{CreateResult, DeleteResult, OperationStatus},
    params::{
        CheckIn, CreateBookmark, CreateHabit, CreateTask, Delete, Id, ListBookmarks, ListTasks,
        ShowDashboard, UpdateBookmark, UpdateHabit, UpdateTask,
    },
    Tracker,
};
use tokio::signal::unix::{signal, SignalKind};

mod errors;

use errors::to_mcp_error;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// MCP server for Tally
#[derive(Clone)]
pub struct TallyMcpServer {
    tracker: Tracker,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl TallyMcpServer {
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker,
            tool_router: Self::tool_router(),
        }
    }

    // ------------------------------------------------------------------
    // Tasks
    // ------------------------------------------------------------------

    #[tool(
        name = "create_task",
        description = "Create a new task. Provide a title (required, up to 120 characters), optional notes, optional due_date (YYYY-MM-DD) and optional priority ('low', 'normal' or 'high', default 'normal'). Returns the created task with its ID."
    )]
    async fn create_task(&self, Parameters(params): Parameters<CreateTask>) -> McpResult {
        debug!("create_task: {params:?}");
        let task = self
            .tracker
            .create_task(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to create task", &e))?;
        Ok(text_result(CreateResult::new(task).to_string()))
    }

    #[tool(
        name = "list_tasks",
        description = "List tasks, open ones first and then by due date. Optionally filter by query (case-insensitive text in title or notes), priority, or hide_completed=true to show open tasks only."
    )]
    async fn list_tasks(&self, Parameters(params): Parameters<ListTasks>) -> McpResult {
        debug!("list_tasks: {params:?}");
        let tasks = self
            .tracker
            .list_tasks(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to list tasks", &e))?;
        Ok(text_result(format!("# Tasks\n\n{tasks}")))
    }

    #[tool(
        name = "show_task",
        description = "Show full details of a single task by ID, including notes and completion time."
    )]
    async fn show_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("show_task: {params:?}");
        let task = self
            .tracker
            .get_task(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to get task", &e))?
            .ok_or_else(|| {
                ErrorData::invalid_params(format!("Task with ID {} not found", params.id), None)
            })?;
        Ok(text_result(task.to_string()))
    }

    #[tool(
        name = "update_task",
        description = "Modify a task by ID. Only provided fields change. An empty string for notes or due_date clears it. Set completed=true to complete the task or completed=false to reopen it. Returns the list of changes made."
    )]
    async fn update_task(&self, Parameters(params): Parameters<UpdateTask>) -> McpResult {
        debug!("update_task: {params:?}");
        let result = self
            .tracker
            .update_task(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to update task", &e))?;
        Ok(text_result(result.to_string()))
    }

    #[tool(
        name = "toggle_task",
        description = "Flip a task between open and completed. Completing records the completion time, which feeds the dashboard's completion history."
    )]
    async fn toggle_task(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("toggle_task: {params:?}");
        let task = self
            .tracker
            .toggle_task(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to toggle task", &e))?;
        let status = if task.completed {
            OperationStatus::success(format!("Marked '{}' as completed", task.title))
        } else {
            OperationStatus::success(format!("Reopened '{}'", task.title))
        };
        Ok(text_result(status.to_string()))
    }

    #[tool(
        name = "delete_task",
        description = "Permanently delete a task. Requires confirmed=true. This operation cannot be undone."
    )]
    async fn delete_task(&self, Parameters(params): Parameters<Delete>) -> McpResult {
        debug!("delete_task: {params:?}");
        let task = self
            .tracker
            .delete_task(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete task", &e))?;
        Ok(text_result(DeleteResult::new(task).to_string()))
    }

    // ------------------------------------------------------------------
    // Habits
    // ------------------------------------------------------------------

    #[tool(
        name = "create_habit",
        description = "Create a habit to track. Provide a name (required, up to 80 characters), optional description, and cadence ('daily' or 'weekly', default 'daily'). New habits start with a streak of zero."
    )]
    async fn create_habit(&self, Parameters(params): Parameters<CreateHabit>) -> McpResult {
        debug!("create_habit: {params:?}");
        let habit = self
            .tracker
            .create_habit(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to create habit", &e))?;
        Ok(text_result(CreateResult::new(habit).to_string()))
    }

    #[tool(
        name = "list_habits",
        description = "List all habits ordered by current streak, longest first, with cadence, best streak and last check-in date."
    )]
    async fn list_habits(&self) -> McpResult {
        debug!("list_habits");
        let habits = self
            .tracker
            .list_habits()
            .await
            .map_err(|e| to_mcp_error("Failed to list habits", &e))?;
        Ok(text_result(format!("# Habits\n\n{habits}")))
    }

    #[tool(
        name = "update_habit",
        description = "Rename a habit, change its description (empty string clears it) or switch its cadence. The current streak and best streak are kept."
    )]
    async fn update_habit(&self, Parameters(params): Parameters<UpdateHabit>) -> McpResult {
        debug!("update_habit: {params:?}");
        let result = self
            .tracker
            .update_habit(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to update habit", &e))?;
        Ok(text_result(result.to_string()))
    }

    #[tool(
        name = "check_in_habit",
        description = "Mark a habit done for the current period: the calendar day for daily habits, the ISO week (Monday to Sunday) for weekly ones. The streak grows when the previous check-in was in the immediately preceding period and restarts at 1 after a gap. A second check-in within the same period is reported and leaves the streak unchanged. Optional date (YYYY-MM-DD) defaults to today in UTC."
    )]
    async fn check_in_habit(&self, Parameters(params): Parameters<CheckIn>) -> McpResult {
        debug!("check_in_habit: {params:?}");
        let outcome = self
            .tracker
            .check_in_habit(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to check in habit", &e))?;
        Ok(text_result(outcome.to_string()))
    }

    #[tool(
        name = "delete_habit",
        description = "Permanently delete a habit and its streak history. Requires confirmed=true. This operation cannot be undone."
    )]
    async fn delete_habit(&self, Parameters(params): Parameters<Delete>) -> McpResult {
        debug!("delete_habit: {params:?}");
        let habit = self
            .tracker
            .delete_habit(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete habit", &e))?;
        Ok(text_result(DeleteResult::new(habit).to_string()))
    }

    // ------------------------------------------------------------------
    // Bookmarks
    // ------------------------------------------------------------------

    #[tool(
        name = "create_bookmark",
        description = "Save a bookmark. Requires a title and an absolute http(s) URL. Optional notes, favorite flag, and tags as a comma-separated string (tags are lowercased and deduplicated)."
    )]
    async fn create_bookmark(&self, Parameters(params): Parameters<CreateBookmark>) -> McpResult {
        debug!("create_bookmark: {params:?}");
        let bookmark = self
            .tracker
            .create_bookmark(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to create bookmark", &e))?;
        Ok(text_result(CreateResult::new(bookmark).to_string()))
    }

    #[tool(
        name = "list_bookmarks",
        description = "List bookmarks with favorites first. Optional query (text in title, notes or URL), tag, favorites=true, and sort ('new' default, 'clicks' or 'title')."
    )]
    async fn list_bookmarks(&self, Parameters(params): Parameters<ListBookmarks>) -> McpResult {
        debug!("list_bookmarks: {params:?}");
        let bookmarks = self
            .tracker
            .list_bookmarks(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to list bookmarks", &e))?;
        Ok(text_result(format!("# Bookmarks\n\n{bookmarks}")))
    }

    #[tool(
        name = "update_bookmark",
        description = "Modify a bookmark by ID. Only provided fields change. Providing tags replaces the whole tag set; an empty string removes all tags."
    )]
    async fn update_bookmark(&self, Parameters(params): Parameters<UpdateBookmark>) -> McpResult {
        debug!("update_bookmark: {params:?}");
        let result = self
            .tracker
            .update_bookmark(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to update bookmark", &e))?;
        Ok(text_result(result.to_string()))
    }

    #[tool(
        name = "visit_bookmark",
        description = "Record a visit to a bookmark, incrementing its click count, and return its URL."
    )]
    async fn visit_bookmark(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("visit_bookmark: {params:?}");
        let bookmark = self
            .tracker
            .visit_bookmark(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to visit bookmark", &e))?;
        let status = OperationStatus::success(format!(
            "Visited '{}' (clicks: {})",
            bookmark.title, bookmark.clicks
        ));
        Ok(text_result(format!("{status}{}\n", bookmark.url)))
    }

    #[tool(
        name = "toggle_favorite",
        description = "Flip the favorite flag of a bookmark. Favorites are listed before other bookmarks."
    )]
    async fn toggle_favorite(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("toggle_favorite: {params:?}");
        let bookmark = self
            .tracker
            .toggle_favorite(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to toggle favorite", &e))?;
        let status = if bookmark.favorite {
            OperationStatus::success(format!("Added '{}' to favorites", bookmark.title))
        } else {
            OperationStatus::success(format!("Removed '{}' from favorites", bookmark.title))
        };
        Ok(text_result(status.to_string()))
    }

    #[tool(
        name = "delete_bookmark",
        description = "Permanently delete a bookmark. Requires confirmed=true. Its tags stay available for other bookmarks."
    )]
    async fn delete_bookmark(&self, Parameters(params): Parameters<Delete>) -> McpResult {
        debug!("delete_bookmark: {params:?}");
        let bookmark = self
            .tracker
            .delete_bookmark(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to delete bookmark", &e))?;
        Ok(text_result(DeleteResult::new(bookmark).to_string()))
    }

    #[tool(
        name = "list_tags",
        description = "List every known bookmark tag in alphabetical order."
    )]
    async fn list_tags(&self) -> McpResult {
        debug!("list_tags");
        let tags = self
            .tracker
            .list_tags()
            .await
            .map_err(|e| to_mcp_error("Failed to list tags", &e))?;
        Ok(text_result(crate::cli::format_tags(&tags)))
    }

    // ------------------------------------------------------------------
    // Dashboard
    // ------------------------------------------------------------------

    #[tool(
        name = "dashboard",
        description = "Overview across everything: number of open tasks, the top habits by streak, the most used tags, the most recent bookmarks, and tasks completed per day over the last 14 days. Optional date (YYYY-MM-DD) defaults to today in UTC."
    )]
    async fn dashboard(&self, Parameters(params): Parameters<ShowDashboard>) -> McpResult {
        debug!("dashboard: {params:?}");
        let dashboard = self
            .tracker
            .dashboard(&params)
            .await
            .map_err(|e| to_mcp_error("Failed to build dashboard", &e))?;
        Ok(text_result(dashboard.to_string()))
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for TallyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "tally".to_string(),
                title: None,
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Tally keeps a to-do list, a set of habits with streak tracking, and a tagged bookmark collection.

## Core Concepts
- **Tasks**: title, optional notes, due date and priority (low/normal/high); open or completed
- **Habits**: daily or weekly routines. Each check-in extends the streak when the previous one fell in the immediately preceding day or ISO week, and restarts it at 1 after a gap. Only one check-in counts per period.
- **Bookmarks**: URLs with notes, tags, a favorite flag and a click counter

## Workflow Examples
1. Start with `dashboard` to see open tasks, top streaks, popular tags and recent completions
2. Capture work with `create_task`, complete it with `toggle_task`
3. Record routines with `check_in_habit`; use `list_habits` to see which streaks are at risk
4. Save references with `create_bookmark` and find them again with `list_bookmarks` by tag or query

## Tool Categories
- **Tasks**: create_task, list_tasks, show_task, update_task, toggle_task, delete_task
- **Habits**: create_habit, list_habits, update_habit, check_in_habit, delete_habit
- **Bookmarks**: create_bookmark, list_bookmarks, update_bookmark, visit_bookmark, toggle_favorite, delete_bookmark, list_tags
- **Overview**: dashboard

All dates are YYYY-MM-DD and default to today in UTC. Deletions require confirmed=true."#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport until the client disconnects or
/// the process receives SIGINT/SIGTERM.
pub async fn run_stdio_server(server: TallyMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Tally MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(reason) => info!("MCP server stopped: {reason:?}"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
