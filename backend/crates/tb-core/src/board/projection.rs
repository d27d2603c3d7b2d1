use crate::{Status, Task};

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Optional filters, AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardFilter {
    pub sprint_id: Option<Uuid>,
    pub epic_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
}

impl BoardFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.sprint_id.is_none_or(|id| task.sprint_id == Some(id))
            && self.epic_id.is_none_or(|id| task.epic_id == Some(id))
            && self.assignee_id.is_none_or(|id| task.assignee_id == Some(id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardColumn {
    pub status: Status,
    pub tasks: Vec<Task>,
    pub total_points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub project_id: Uuid,
    pub filter: BoardFilter,
    pub columns: Vec<BoardColumn>,
}

impl Board {
    pub fn task_count(&self) -> usize {
        self.columns.iter().map(|c| c.tasks.len()).sum()
    }
}

/// Groups tasks into one column per status, columns by `sort_order` and tasks
/// by `position`. Every status yields a column, even when empty.
pub fn project_board(
    project_id: Uuid,
    mut statuses: Vec<Status>,
    tasks: Vec<Task>,
    filter: &BoardFilter,
) -> Board {
    statuses.sort_by_key(|s| s.sort_order);

    let mut by_status: HashMap<Uuid, Vec<Task>> = HashMap::new();
    for task in tasks.into_iter().filter(|t| filter.matches(t)) {
        by_status.entry(task.status_id).or_default().push(task);
    }

    let columns = statuses
        .into_iter()
        .map(|status| {
            let mut tasks = by_status.remove(&status.id).unwrap_or_default();
            tasks.sort_by(|a, b| {
                a.position
                    .cmp(&b.position)
                    .then_with(|| a.created_at.cmp(&b.created_at))
            });
            let total_points = tasks.iter().map(Task::points).sum();
            BoardColumn {
                status,
                tasks,
                total_points,
            }
        })
        .collect();

    Board {
        project_id,
        filter: filter.clone(),
        columns,
    }
}
