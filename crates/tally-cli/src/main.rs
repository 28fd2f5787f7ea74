//! Tally CLI application
//!
//! Command-line interface and MCP server for tasks, habit streaks and
//! bookmarks.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands, DashboardArgs};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, TallyMcpServer};
use renderer::TerminalRenderer;
use tally_core::TrackerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize tracker")?;

    info!("Tally started with database {}", tracker.database_path().display());

    let renderer = TerminalRenderer::new(!no_color);

    match command {
        Some(Task { command }) => {
            Cli::new(tracker, renderer)
                .handle_task_command(command)
                .await
        }
        Some(Habit { command }) => {
            Cli::new(tracker, renderer)
                .handle_habit_command(command)
                .await
        }
        Some(Bookmark { command }) => {
            Cli::new(tracker, renderer)
                .handle_bookmark_command(command)
                .await
        }
        Some(Dashboard(args)) => {
            Cli::new(tracker, renderer)
                .show_dashboard(&args.into())
                .await
        }
        Some(Serve) => {
            info!("Starting Tally MCP server");
            run_stdio_server(TallyMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => {
            Cli::new(tracker, renderer)
                .show_dashboard(&DashboardArgs::default().into())
                .await
        }
    }
}
