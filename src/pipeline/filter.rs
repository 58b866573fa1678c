use chrono::{DateTime, Utc};
use tracing::{debug, error};

use crate::board::RawTask;
use crate::model::{self, RecurringTask};
use crate::recurrence;

/// Label name marking a task as recurring. Exact, case-sensitive match.
pub const RECURRING_LABEL: &str = "Regular";

fn is_recurring(task: &RawTask) -> bool {
    task.labels.iter().any(|label| label.name == RECURRING_LABEL)
}

/// Select the tasks eligible for rescheduling, preserving input order.
///
/// Eligible means: tagged with [`RECURRING_LABEL`], due date present and
/// parseable, strictly past due relative to `now`, and carrying a
/// parseable recurrence rule in the description. A task failing a
/// condition is logged and dropped; one bad task never affects the rest.
pub fn eligible_tasks(tasks: &[RawTask], now: DateTime<Utc>) -> Vec<RecurringTask> {
    let mut eligible = Vec::new();
    for task in tasks {
        debug!(task = %task.name, "checking task");
        if !is_recurring(task) {
            debug!(task = %task.name, "skipped: not a recurring task");
            continue;
        }
        let Some(raw_due) = task.due.as_deref() else {
            error!(task = %task.name, "skipped: recurring task has no due date");
            continue;
        };
        let due = match model::parse_due(raw_due) {
            Ok(due) => due,
            Err(err) => {
                error!(task = %task.name, %err, "skipped: unparsable due date");
                continue;
            }
        };
        if due >= now {
            debug!(task = %task.name, %due, "skipped: not yet due");
            continue;
        }
        let rule = match recurrence::parse(&task.desc) {
            Ok(rule) => rule,
            Err(err) => {
                error!(task = %task.name, %err, "skipped: unparsable recurrence rule");
                continue;
            }
        };
        eligible.push(RecurringTask {
            name: task.name.clone(),
            id: task.id.clone(),
            due,
            rule,
        });
    }
    eligible
}
