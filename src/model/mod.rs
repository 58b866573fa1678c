//! Domain types for the rescheduling run.
//!
//! Everything here is constructed fresh from a board query at the start of
//! a run and discarded when the run ends. Due dates travel in a fixed wire
//! format with a literal-zero millisecond field (see [`DUE_FORMAT`]).
//!
//! ## Components
//!
//! - [`BoardList`]: a weekday bucket on the board
//! - [`RecurringTask`]: a past-due task awaiting rescheduling
//! - [`OrderableTask`]: a task considered purely for list ordering
//! - [`parse_due`] / [`format_due`]: wire timestamp conversions

mod list;
mod task;
mod timestamp;

pub use list::{BoardList, WEEKDAY_NAMES, weekday_name};
pub use task::{OrderableTask, RecurringTask};
pub use timestamp::{DUE_FORMAT, format_due, parse_due};
