use serde::Deserialize;

/// Request body for recording that one task blocks another
#[derive(Debug, Deserialize)]
pub struct CreateDependencyRequest {
    pub from_task_id: String,
    pub to_task_id: String,
}
