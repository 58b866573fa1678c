use chrono::{DateTime, Utc};

use crate::recurrence::Rule;

/// A past-due, recurrence-tagged task awaiting rescheduling.
///
/// Built by the task filter, which guarantees `due` was strictly earlier
/// than the run's "now" at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurringTask {
    pub name: String,
    pub id: String,
    pub due: DateTime<Utc>,
    pub rule: Rule,
}

/// A task considered purely for ordering in the second pass.
///
/// Labels and past-due status are irrelevant here; every task with a
/// parseable due date participates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderableTask {
    pub name: String,
    pub id: String,
    pub due: DateTime<Utc>,
}
