use crate::api::parse::deserialize_some;

use chrono::NaiveDate;
use serde::Deserialize;

/// Request body for a partial epic update
#[derive(Debug, Default, Deserialize)]
pub struct UpdateEpicRequest {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub description: Option<Option<String>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub color: Option<Option<String>>,

    /// `todo`, `in_progress` or `done`; never derived from member tasks
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub start_date: Option<Option<NaiveDate>>,

    #[serde(default, deserialize_with = "deserialize_some")]
    pub end_date: Option<Option<NaiveDate>>,
}
