use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for creating a task
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    /// `task`, `bug`, `story` or `feature`; defaults to `task`
    #[serde(default)]
    pub task_type: Option<String>,

    /// `low`, `medium`, `high` or `critical`; defaults to `medium`
    #[serde(default)]
    pub priority: Option<String>,

    #[serde(default)]
    pub story_points: Option<i64>,

    /// Starting column; the first non-done column when absent
    #[serde(default)]
    pub status_id: Option<String>,

    #[serde(default)]
    pub epic_id: Option<String>,

    #[serde(default)]
    pub sprint_id: Option<String>,

    #[serde(default)]
    pub assignee_id: Option<String>,

    #[serde(default)]
    pub estimated_hours: Option<f64>,

    /// `YYYY-MM-DD`
    #[serde(default)]
    pub due_date: Option<NaiveDate>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}
