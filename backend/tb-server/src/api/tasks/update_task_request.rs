use crate::api::parse::deserialize_some;

use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for a partial task update.
///
/// Omitted keys leave a field alone; `null` clears a nullable field.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,

    #[serde(default)]
    pub task_type: Option<String>,

    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub story_points: Option<Option<i64>>,

    /// Moves the task to the end of this column
    #[serde(default)]
    pub status_id: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub epic_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub sprint_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub assignee_id: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub estimated_hours: Option<Option<f64>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub due_date: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub start_date: Option<Option<NaiveDate>>,
}
