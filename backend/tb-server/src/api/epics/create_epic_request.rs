use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for creating an epic
#[derive(Debug, Deserialize)]
pub struct CreateEpicRequest {
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub color: Option<String>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}
