use tb_core::TimeEntry;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct TimeEntryResponse {
    pub time_entry: TimeEntry,
}

#[derive(Debug, Serialize)]
pub struct TimeEntryListResponse {
    pub time_entries: Vec<TimeEntry>,
    /// Sum of `hours` across `time_entries`
    pub total_hours: f64,
}
