use serde::Serialize;
use uuid::Uuid;

/// Response body for a successful delete
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted_id: Uuid,
}

impl DeleteResponse {
    pub fn new(deleted_id: Uuid) -> Self {
        Self { deleted_id }
    }
}
