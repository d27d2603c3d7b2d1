use tb_core::Status;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: Status,
}

#[derive(Debug, Serialize)]
pub struct StatusListResponse {
    pub statuses: Vec<Status>,
}
