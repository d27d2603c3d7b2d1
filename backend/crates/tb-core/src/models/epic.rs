use crate::EpicStatus;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grouping label. Tasks point at an epic through `Task::epic_id`; the epic
/// never owns them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Epic {
    pub id: Uuid,
    pub project_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub status: EpicStatus,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
}

impl Epic {
    pub fn new(project_id: Uuid, title: String, created_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            title,
            description: None,
            color: None,
            status: EpicStatus::Todo,
            start_date: None,
            end_date: None,
            created_at: now,
            updated_at: now,
            created_by,
        }
    }
}
