//! Command-line argument definitions using clap
//!
//! Each subcommand has its own argument struct with clap derives and a `From`
//! impl into the matching core parameter type, so the core crate stays free of
//! clap attributes:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use jiff::civil::Date;
use tally_core::params::*;

/// Tasks, habit streaks and bookmarks from the terminal
///
/// Tally keeps a to-do list, a set of daily or weekly habits with streak
/// tracking, and a tagged bookmark collection in a single SQLite database. Run
/// without a subcommand to see the dashboard, or use `serve` to expose the
/// same operations to AI assistants over MCP (Model Context Protocol).
#[derive(Parser)]
#[command(version, about, name = "tally")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/tally/tally.db
    #[arg(long, global = true, env = "TALLY_DATABASE_FILE")]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage tasks
    #[command(alias = "t")]
    Task {
        #[command(subcommand)]
        command: TaskCommands,
    },
    /// Manage habits and check-ins
    #[command(alias = "h")]
    Habit {
        #[command(subcommand)]
        command: HabitCommands,
    },
    /// Manage bookmarks and tags
    #[command(alias = "b")]
    Bookmark {
        #[command(subcommand)]
        command: BookmarkCommands,
    },
    /// Show open tasks, top streaks, popular tags and recent completions
    #[command(alias = "d")]
    Dashboard(DashboardArgs),
    /// Start the MCP server
    Serve,
}

// ============================================================================
// Shared arguments
// ============================================================================

/// Identify a single resource by ID
#[derive(ClapArgs)]
pub struct IdArgs {
    #[arg(help = "Unique identifier of the resource")]
    pub id: u64,
}

impl From<IdArgs> for Id {
    fn from(val: IdArgs) -> Self {
        Id { id: val.id }
    }
}

/// Permanently delete a resource
#[derive(ClapArgs)]
pub struct DeleteArgs {
    #[arg(help = "Unique identifier of the resource to permanently delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteArgs> for Delete {
    fn from(val: DeleteArgs) -> Self {
        Delete {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

// ============================================================================
// Tasks
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum PriorityArg {
    Low,
    Normal,
    High,
}

impl std::fmt::Display for PriorityArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PriorityArg::Low => write!(f, "low"),
            PriorityArg::Normal => write!(f, "normal"),
            PriorityArg::High => write!(f, "high"),
        }
    }
}

/// Add a new task
#[derive(ClapArgs)]
pub struct AddTaskArgs {
    /// Title of the task
    pub title: String,
    #[arg(short, long, help = "Optional notes with more detail")]
    pub notes: Option<String>,
    #[arg(long, help = "Due date (YYYY-MM-DD)")]
    pub due: Option<Date>,
    #[arg(short, long, help = "Priority (defaults to normal)")]
    pub priority: Option<PriorityArg>,
}

impl From<AddTaskArgs> for CreateTask {
    fn from(val: AddTaskArgs) -> Self {
        CreateTask {
            title: val.title,
            notes: val.notes,
            due_date: val.due.map(|d| d.to_string()),
            priority: val.priority.map(|p| p.to_string()),
        }
    }
}

/// List tasks, open ones first and then by due date
#[derive(ClapArgs)]
pub struct ListTasksArgs {
    #[arg(short, long, help = "Only tasks whose title or notes contain this text")]
    pub query: Option<String>,
    #[arg(short, long, help = "Only tasks with this priority")]
    pub priority: Option<PriorityArg>,
    #[arg(long, help = "Hide completed tasks")]
    pub open: bool,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            query: val.query,
            priority: val.priority.map(|p| p.to_string()),
            hide_completed: val.open,
        }
    }
}

/// Edit a task
///
/// Only the given fields change. Pass an empty string to `--notes` or
/// `--due` to clear them.
#[derive(ClapArgs)]
pub struct EditTaskArgs {
    #[arg(help = "Unique identifier of the task to edit")]
    pub id: u64,
    #[arg(short, long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New notes, or empty to clear")]
    pub notes: Option<String>,
    #[arg(long, help = "New due date (YYYY-MM-DD), or empty to clear")]
    pub due: Option<String>,
    #[arg(short, long, help = "New priority")]
    pub priority: Option<PriorityArg>,
    #[arg(long, help = "Mark as completed or reopen (true/false)")]
    pub completed: Option<bool>,
}

impl From<EditTaskArgs> for UpdateTask {
    fn from(val: EditTaskArgs) -> Self {
        UpdateTask {
            id: val.id,
            title: val.title,
            notes: val.notes,
            due_date: val.due,
            priority: val.priority.map(|p| p.to_string()),
            completed: val.completed,
        }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    #[command(alias = "a")]
    Add(AddTaskArgs),
    /// List tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show details of a task
    #[command(alias = "s")]
    Show(IdArgs),
    /// Edit a task
    #[command(alias = "e")]
    Edit(EditTaskArgs),
    /// Flip a task between open and completed
    #[command(alias = "t")]
    Toggle(IdArgs),
    /// Delete a task permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ============================================================================
// Habits
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum CadenceArg {
    Daily,
    Weekly,
}

impl std::fmt::Display for CadenceArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CadenceArg::Daily => write!(f, "daily"),
            CadenceArg::Weekly => write!(f, "weekly"),
        }
    }
}

/// Add a new habit
#[derive(ClapArgs)]
pub struct AddHabitArgs {
    /// Name of the habit
    pub name: String,
    #[arg(short, long, help = "Optional description")]
    pub description: Option<String>,
    #[arg(short, long, help = "How often the habit is due (defaults to daily)")]
    pub cadence: Option<CadenceArg>,
}

impl From<AddHabitArgs> for CreateHabit {
    fn from(val: AddHabitArgs) -> Self {
        CreateHabit {
            name: val.name,
            description: val.description,
            cadence: val.cadence.map(|c| c.to_string()),
        }
    }
}

/// Edit a habit's name, description or cadence
///
/// The current streak is kept as is.
#[derive(ClapArgs)]
pub struct EditHabitArgs {
    #[arg(help = "Unique identifier of the habit to edit")]
    pub id: u64,
    #[arg(short, long, help = "New name")]
    pub name: Option<String>,
    #[arg(short, long, help = "New description, or empty to clear")]
    pub description: Option<String>,
    #[arg(short, long, help = "New cadence")]
    pub cadence: Option<CadenceArg>,
}

impl From<EditHabitArgs> for UpdateHabit {
    fn from(val: EditHabitArgs) -> Self {
        UpdateHabit {
            id: val.id,
            name: val.name,
            description: val.description,
            cadence: val.cadence.map(|c| c.to_string()),
        }
    }
}

/// Check in a habit for the current day or week
#[derive(ClapArgs)]
pub struct CheckInArgs {
    #[arg(help = "Unique identifier of the habit to check in")]
    pub id: u64,
    #[arg(long, help = "Date of the check-in (YYYY-MM-DD), defaults to today in UTC")]
    pub date: Option<Date>,
}

impl From<CheckInArgs> for CheckIn {
    fn from(val: CheckInArgs) -> Self {
        CheckIn {
            id: val.id,
            date: val.date.map(|d| d.to_string()),
        }
    }
}

#[derive(Subcommand)]
pub enum HabitCommands {
    /// Add a new habit
    #[command(alias = "a")]
    Add(AddHabitArgs),
    /// List habits by current streak
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show details of a habit
    #[command(alias = "s")]
    Show(IdArgs),
    /// Edit a habit
    #[command(alias = "e")]
    Edit(EditHabitArgs),
    /// Check in a habit
    #[command(aliases = ["c", "done"])]
    CheckIn(CheckInArgs),
    /// Delete a habit permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
}

// ============================================================================
// Bookmarks
// ============================================================================

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Newest first
    New,
    /// Most visited first
    Clicks,
    /// Alphabetical by title
    Title,
}

impl std::fmt::Display for SortArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortArg::New => write!(f, "new"),
            SortArg::Clicks => write!(f, "clicks"),
            SortArg::Title => write!(f, "title"),
        }
    }
}

/// Add a new bookmark
#[derive(ClapArgs)]
pub struct AddBookmarkArgs {
    /// Title of the bookmark
    pub title: String,
    /// Absolute http(s) URL
    pub url: String,
    #[arg(short, long, help = "Optional notes")]
    pub notes: Option<String>,
    #[arg(short, long, help = "Mark as favorite")]
    pub favorite: bool,
    #[arg(short, long, help = "Tags as comma-separated list")]
    pub tags: Option<String>,
}

impl From<AddBookmarkArgs> for CreateBookmark {
    fn from(val: AddBookmarkArgs) -> Self {
        CreateBookmark {
            title: val.title,
            url: val.url,
            notes: val.notes,
            favorite: val.favorite,
            tags: val.tags,
        }
    }
}

/// List bookmarks, favorites first
#[derive(ClapArgs)]
pub struct ListBookmarksArgs {
    #[arg(short, long, help = "Only bookmarks whose title, notes or URL contain this text")]
    pub query: Option<String>,
    #[arg(short, long, help = "Only bookmarks with this tag")]
    pub tag: Option<String>,
    #[arg(short, long, help = "Only favorites")]
    pub favorites: bool,
    #[arg(short, long, help = "Ordering after favorites (defaults to new)")]
    pub sort: Option<SortArg>,
}

impl From<ListBookmarksArgs> for ListBookmarks {
    fn from(val: ListBookmarksArgs) -> Self {
        ListBookmarks {
            query: val.query,
            tag: val.tag,
            favorites: val.favorites,
            sort: val.sort.map(|s| s.to_string()),
        }
    }
}

/// Edit a bookmark
///
/// `--tags` replaces the whole tag set; an empty string removes all tags.
#[derive(ClapArgs)]
pub struct EditBookmarkArgs {
    #[arg(help = "Unique identifier of the bookmark to edit")]
    pub id: u64,
    #[arg(long, help = "New title")]
    pub title: Option<String>,
    #[arg(short, long, help = "New URL")]
    pub url: Option<String>,
    #[arg(short, long, help = "New notes, or empty to clear")]
    pub notes: Option<String>,
    #[arg(short, long, help = "Set or unset favorite (true/false)")]
    pub favorite: Option<bool>,
    #[arg(short, long, help = "Replacement tags as comma-separated list")]
    pub tags: Option<String>,
}

impl From<EditBookmarkArgs> for UpdateBookmark {
    fn from(val: EditBookmarkArgs) -> Self {
        UpdateBookmark {
            id: val.id,
            title: val.title,
            url: val.url,
            notes: val.notes,
            favorite: val.favorite,
            tags: val.tags,
        }
    }
}

#[derive(Subcommand)]
pub enum BookmarkCommands {
    /// Add a new bookmark
    #[command(alias = "a")]
    Add(AddBookmarkArgs),
    /// List bookmarks
    #[command(aliases = ["l", "ls"])]
    List(ListBookmarksArgs),
    /// Show details of a bookmark
    #[command(alias = "s")]
    Show(IdArgs),
    /// Edit a bookmark
    #[command(alias = "e")]
    Edit(EditBookmarkArgs),
    /// Record a visit and print the URL
    #[command(alias = "v")]
    Visit(IdArgs),
    /// Toggle the favorite flag
    #[command(alias = "f")]
    Favorite(IdArgs),
    /// Delete a bookmark permanently
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteArgs),
    /// List all known tags
    Tags,
}

// ============================================================================
// Dashboard
// ============================================================================

/// Show the dashboard
#[derive(ClapArgs, Default)]
pub struct DashboardArgs {
    #[arg(long, help = "Reference date (YYYY-MM-DD), defaults to today in UTC")]
    pub date: Option<Date>,
}

impl From<DashboardArgs> for ShowDashboard {
    fn from(val: DashboardArgs) -> Self {
        ShowDashboard {
            date: val.date.map(|d| d.to_string()),
        }
    }
}
