//! Display formatting and result wrapper types.
//!
//! Domain models implement `Display` directly as markdown; collections and
//! operation results are wrapped in newtypes so every interface (terminal,
//! MCP) renders them the same way.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │  Collections &  │    │   Formatted     │
//! │ (Task, Habit,   │───▶│  Result Types   │───▶│    Output       │
//! │  Bookmark)      │    │                 │    │  (Terminal/MCP) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`collections`]: list wrappers (Tasks, Habits, Bookmarks, TagCounts)
//! - [`results`]: operation results (CreateResult, UpdateResult,
//!   DeleteResult, CheckInOutcome)
//! - [`status`]: plain confirmation messages (OperationStatus)
//! - [`datetime`]: timestamp formatting
//! - [`models`] and [`dashboard`]: `Display` for the domain types
//!
//! ```rust
//! use tally_core::display::OperationStatus;
//!
//! let status = OperationStatus::success("Visited 'Rust Book' (clicks: 3)".to_string());
//! assert_eq!(status.to_string(), "Success: Visited 'Rust Book' (clicks: 3)\n");
//! ```

pub mod collections;
pub mod dashboard;
pub mod datetime;
pub mod models;
pub mod results;
pub mod status;

pub use collections::{Bookmarks, Habits, TagCounts, Tasks};
pub use datetime::LocalDateTime;
pub use results::{CheckInOutcome, CreateResult, DeleteResult, Resource, UpdateResult};
pub use status::OperationStatus;
