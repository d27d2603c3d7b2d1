use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// `from_task_id` blocks `to_task_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Dependency {
    pub id: Uuid,
    pub project_id: Uuid,
    pub from_task_id: Uuid,
    pub to_task_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub created_by: Uuid,
}

impl Dependency {
    pub fn new(project_id: Uuid, from_task_id: Uuid, to_task_id: Uuid, created_by: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            from_task_id,
            to_task_id,
            created_at: Utc::now(),
            created_by,
        }
    }
}
