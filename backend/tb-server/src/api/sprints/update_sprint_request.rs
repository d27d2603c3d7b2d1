use crate::api::parse::deserialize_some;

use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for editing a sprint that has not completed
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSprintRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub goal: Option<Option<String>>,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}
