use serde::Deserialize;

/// Optional board filters, AND-combined
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    pub sprint_id: Option<String>,
    pub epic_id: Option<String>,
    pub assignee_id: Option<String>,
}
