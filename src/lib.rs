//! # Rota - recurring-task bookkeeping for a weekday kanban board
//!
//! Rota is a one-shot batch job for boards whose lists are named after
//! weekdays. It finds recurring tasks whose due date has passed, advances
//! the due date by the recurrence rule written in the task description
//! ("2 weeks", "1 months", ...), moves the task to the list for the new
//! due date's weekday, and finally re-sorts every list by due date.
//!
//! ## Quick Start
//!
//! ```bash
//! # credentials: board id, API key, API token, one per line
//! rota ~/.config/rota/credentials
//!
//! # see what would change without touching the board
//! rota ~/.config/rota/credentials --dry-run --verbose
//! ```
//!
//! The run is strictly sequential and best-effort: any task or list that
//! fails to fetch, parse, or update is logged and skipped, and the job
//! carries on with the rest of the board.
//!
//! ## Modules
//!
//! - [`cli`]: Command-line surface
//! - [`config`]: Credentials file loading
//! - [`error`]: Error types and result alias
//! - [`model`]: Domain types and the wire timestamp format
//! - [`recurrence`]: Rule grammar and due-date advancement
//! - [`board`]: Board service boundary (Trello REST client)
//! - [`pipeline`]: Two-phase relocate/reorder orchestration

/// Command-line surface definitions using clap.
pub mod cli;

/// Credentials file loading.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `RotaError` enum and `Result<T>` type alias.
pub mod error;

/// Domain types.
///
/// Includes `BoardList`, `RecurringTask`, `OrderableTask`, and the fixed
/// due-date wire format.
pub mod model;

/// Recurrence-rule grammar and due-date advancement.
pub mod recurrence;

/// Board service boundary.
///
/// The `BoardService` trait plus the blocking Trello REST implementation.
pub mod board;

/// Two-phase rescheduling pipeline.
pub mod pipeline;

pub mod logging;
