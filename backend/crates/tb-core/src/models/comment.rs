use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub task_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(task_id: Uuid, author_id: Uuid, body: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            author_id,
            body,
            created_at: Utc::now(),
        }
    }
}
