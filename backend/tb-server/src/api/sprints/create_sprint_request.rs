use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for creating a sprint
#[derive(Debug, Deserialize)]
pub struct CreateSprintRequest {
    pub name: String,

    #[serde(default)]
    pub goal: Option<String>,

    /// First day of the sprint, `YYYY-MM-DD`
    pub start_date: NaiveDate,

    /// Last day of the sprint, inclusive
    pub end_date: NaiveDate,
}
