use serde::Deserialize;

/// Request body for appending a status column
#[derive(Debug, Deserialize)]
pub struct CreateStatusRequest {
    pub name: String,

    #[serde(default)]
    pub color: Option<String>,

    /// Tasks entering a done column are stamped complete
    #[serde(default)]
    pub is_done: bool,
}
