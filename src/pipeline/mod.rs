//! Two-phase rescheduling pipeline.
//!
//! Phase 1 relocates past-due recurring tasks: per list, fetch tasks,
//! filter, advance each task's due date, and move it to the list named
//! for the new due date's weekday. Phase 2 starts only after phase 1 has
//! finished for every list: per list, fetch fresh tasks and reposition
//! them into due-date order.
//!
//! Failure policy is best-effort throughout. Every per-unit failure is
//! logged and that unit of work abandoned; the run itself never aborts.
//! A failed list fetch degrades to an empty board and both phases become
//! no-ops.

mod filter;
mod order;
mod route;

pub use filter::{RECURRING_LABEL, eligible_tasks};
pub use order::{orderable_tasks, sort_by_due};
pub use route::target_list;

use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::board::{BoardService, Position, RawTask};
use crate::model::{BoardList, OrderableTask, RecurringTask, WEEKDAY_NAMES};
use crate::recurrence;

/// Counters for the closing summary line. Failures only ever show up
/// here; they never affect the process exit status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lists: usize,
    pub relocated: usize,
    pub repositioned: usize,
    pub skipped: usize,
}

pub struct Pipeline<'a, B: BoardService> {
    board: &'a B,
    now: DateTime<Utc>,
    dry_run: bool,
}

impl<'a, B: BoardService> Pipeline<'a, B> {
    /// `now` is captured once by the caller and held constant so due-date
    /// comparisons stay consistent across the whole batch.
    pub fn new(board: &'a B, now: DateTime<Utc>, dry_run: bool) -> Self {
        Self {
            board,
            now,
            dry_run,
        }
    }

    /// Run both phases to completion and report what happened.
    pub fn run(&self) -> RunSummary {
        let lists = self.fetch_weekday_lists();
        let mut summary = RunSummary {
            lists: lists.len(),
            ..RunSummary::default()
        };

        info!("relocating past-due recurring tasks");
        for list in &lists {
            info!(list = %list.name, "processing list");
            let tasks = self.fetch_tasks(list);
            for task in eligible_tasks(&tasks, self.now) {
                match self.relocate(&task, &lists) {
                    Ok(()) => summary.relocated += 1,
                    Err(err) => {
                        error!(task = %task.name, %err, "task left in place");
                        summary.skipped += 1;
                    }
                }
            }
        }

        info!("reordering lists by due date");
        for list in &lists {
            info!(list = %list.name, "ordering list");
            let tasks = self.fetch_tasks(list);
            for task in sort_by_due(orderable_tasks(&tasks)) {
                match self.reposition(&task) {
                    Ok(()) => summary.repositioned += 1,
                    Err(err) => {
                        error!(task = %task.name, %err, "task not repositioned");
                        summary.skipped += 1;
                    }
                }
            }
        }

        summary
    }

    /// The board's weekday lists, fetched once per run.
    ///
    /// A fetch failure degrades to an empty collection so the rest of the
    /// run becomes a no-op instead of an abort.
    fn fetch_weekday_lists(&self) -> Vec<BoardList> {
        let raw = match self.board.lists() {
            Ok(raw) => raw,
            Err(err) => {
                error!(%err, "failed to fetch board lists, nothing to do");
                return Vec::new();
            }
        };
        let lists: Vec<BoardList> = raw
            .into_iter()
            .filter(|list| WEEKDAY_NAMES.contains(&list.name.as_str()))
            .map(|list| BoardList {
                name: list.name,
                id: list.id,
            })
            .collect();
        if lists.len() != WEEKDAY_NAMES.len() {
            error!(
                found = lists.len(),
                expected = WEEKDAY_NAMES.len(),
                "board is missing weekday lists"
            );
        }
        debug!(?lists, "fetched weekday lists");
        lists
    }

    fn fetch_tasks(&self, list: &BoardList) -> Vec<RawTask> {
        match self.board.tasks(&list.id) {
            Ok(tasks) => {
                info!(list = %list.name, count = tasks.len(), "fetched tasks");
                tasks
            }
            Err(err) => {
                error!(list = %list.name, %err, "failed to fetch tasks, skipping list");
                Vec::new()
            }
        }
    }

    /// Advance, route, and move one eligible task.
    fn relocate(&self, task: &RecurringTask, lists: &[BoardList]) -> crate::error::Result<()> {
        let due = recurrence::advance(task.due, &task.rule, self.now)?;
        let target = target_list(due, lists)?;
        info!(
            task = %task.name,
            from = %task.due,
            to = %due,
            list = %target.name,
            "relocating task"
        );
        if self.dry_run {
            return Ok(());
        }
        self.board.relocate(&task.id, due, false, &target.id)
    }

    /// Push one task to the bottom of its list. Issued in ascending due
    /// order, so the whole pass leaves the list sorted.
    fn reposition(&self, task: &OrderableTask) -> crate::error::Result<()> {
        debug!(task = %task.name, due = %task.due, "repositioning task");
        if self.dry_run {
            return Ok(());
        }
        self.board.reposition(&task.id, Position::Bottom)
    }
}
