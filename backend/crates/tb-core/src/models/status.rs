use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A workflow column. `sort_order` is unique within a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Status {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub color: Option<String>,
    pub sort_order: i64,
    pub is_done: bool,
    pub created_at: DateTime<Utc>,
}

impl Status {
    pub fn new(
        project_id: Uuid,
        name: String,
        color: Option<String>,
        sort_order: i64,
        is_done: bool,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            name,
            color,
            sort_order,
            is_done,
            created_at: Utc::now(),
        }
    }

    /// Status set seeded into every new project.
    pub fn defaults(project_id: Uuid) -> Vec<Status> {
        vec![
            Status::new(project_id, "To Do".into(), Some("#94a3b8".into()), 0, false),
            Status::new(project_id, "In Progress".into(), Some("#3b82f6".into()), 1, false),
            Status::new(project_id, "Done".into(), Some("#22c55e".into()), 2, true),
        ]
    }
}
