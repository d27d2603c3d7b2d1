use serde::Deserialize;

/// Query parameters for listing tasks. Filters are AND-combined.
#[derive(Debug, Default, Deserialize)]
pub struct ListTasksQuery {
    pub status_id: Option<String>,
    pub sprint_id: Option<String>,
    pub epic_id: Option<String>,
    pub assignee_id: Option<String>,
}
