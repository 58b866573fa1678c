//! Board service boundary.
//!
//! The pipeline talks to the board through the [`BoardService`] trait;
//! [`TrelloBoard`] is the production implementation over the Trello REST
//! API. Tests substitute an in-memory fake.
//!
//! Every call is a blocking synchronous request. Nothing is retried and
//! nothing is batched; a failed call surfaces as an error for the caller
//! to log and skip.

mod trello;
mod types;

pub use trello::{DEFAULT_API_URL, TrelloBoard};
pub use types::{Position, RawLabel, RawList, RawTask};

use chrono::{DateTime, Utc};

use crate::error::Result;

/// Operations the rescheduler needs from the task board.
pub trait BoardService {
    /// All lists on the board.
    fn lists(&self) -> Result<Vec<RawList>>;

    /// All tasks on one list.
    fn tasks(&self, list_id: &str) -> Result<Vec<RawTask>>;

    /// Set a task's due date and completion flag and move it to `list_id`.
    fn relocate(
        &self,
        task_id: &str,
        due: DateTime<Utc>,
        completed: bool,
        list_id: &str,
    ) -> Result<()>;

    /// Move a task to `position` within its current list.
    fn reposition(&self, task_id: &str, position: Position) -> Result<()>;
}
