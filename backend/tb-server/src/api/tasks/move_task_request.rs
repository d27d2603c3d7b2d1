use serde::Deserialize;

/// Request body for moving a task
#[derive(Debug, Deserialize)]
pub struct MoveTaskRequest {
    /// Destination column; the task's current column when absent
    #[serde(default)]
    pub status_id: Option<String>,

    /// Zero-based index in the destination column, clamped to its bounds
    pub position: i64,
}
