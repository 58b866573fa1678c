use tracing::error;

use crate::board::RawTask;
use crate::model::{self, OrderableTask};

/// View a list's tasks for ordering, in input order.
///
/// Labels and past-due status are irrelevant here. A task whose due date
/// is missing or unparsable cannot be ordered; it is logged and left
/// wherever the board currently has it.
pub fn orderable_tasks(tasks: &[RawTask]) -> Vec<OrderableTask> {
    let mut orderable = Vec::new();
    for task in tasks {
        let Some(raw_due) = task.due.as_deref() else {
            error!(task = %task.name, "not ordering: task has no due date");
            continue;
        };
        match model::parse_due(raw_due) {
            Ok(due) => orderable.push(OrderableTask {
                name: task.name.clone(),
                id: task.id.clone(),
                due,
            }),
            Err(err) => error!(task = %task.name, %err, "not ordering: unparsable due date"),
        }
    }
    orderable
}

/// Sort by due date ascending. Ties keep their relative input order.
pub fn sort_by_due(mut tasks: Vec<OrderableTask>) -> Vec<OrderableTask> {
    tasks.sort_by_key(|task| task.due);
    tasks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::parse_due;

    fn task(name: &str, due: Option<&str>) -> RawTask {
        RawTask {
            name: name.to_string(),
            id: format!("id-{name}"),
            due: due.map(str::to_string),
            desc: String::new(),
            labels: Vec::new(),
        }
    }

    #[test]
    fn sorts_ascending_by_due_date() {
        let tasks = [
            task("d3", Some("2023-02-10T00:00:00.000Z")),
            task("d1", Some("2023-02-01T00:00:00.000Z")),
            task("d2", Some("2023-02-05T00:00:00.000Z")),
        ];
        let names: Vec<_> = sort_by_due(orderable_tasks(&tasks))
            .into_iter()
            .map(|task| task.name)
            .collect();
        assert_eq!(names, ["d1", "d2", "d3"]);
    }

    #[test]
    fn equal_due_dates_keep_input_order() {
        let tasks = [
            task("first", Some("2023-02-05T00:00:00.000Z")),
            task("second", Some("2023-02-05T00:00:00.000Z")),
            task("earlier", Some("2023-02-01T00:00:00.000Z")),
        ];
        let names: Vec<_> = sort_by_due(orderable_tasks(&tasks))
            .into_iter()
            .map(|task| task.name)
            .collect();
        assert_eq!(names, ["earlier", "first", "second"]);
    }

    #[test]
    fn skips_tasks_without_a_sortable_due_date() {
        let tasks = [
            task("ok", Some("2023-02-01T00:00:00.000Z")),
            task("none", None),
            task("bad", Some("soon")),
        ];
        let orderable = orderable_tasks(&tasks);
        assert_eq!(orderable.len(), 1);
        assert_eq!(orderable[0].due, parse_due("2023-02-01T00:00:00.000Z").unwrap());
    }
}
