use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeEntry {
    pub id: Uuid,
    pub task_id: Uuid,
    pub user_id: Uuid,
    pub hours: f64,
    pub spent_on: NaiveDate,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TimeEntry {
    pub fn new(
        task_id: Uuid,
        user_id: Uuid,
        hours: f64,
        spent_on: NaiveDate,
        note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            task_id,
            user_id,
            hours,
            spent_on,
            note,
            created_at: Utc::now(),
        }
    }
}
