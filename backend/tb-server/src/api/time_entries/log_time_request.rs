use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LogTimeRequest {
    /// Positive, at most one day's worth
    pub hours: f64,

    /// Defaults to today (UTC)
    #[serde(default)]
    pub spent_on: Option<NaiveDate>,

    #[serde(default)]
    pub note: Option<String>,
}
