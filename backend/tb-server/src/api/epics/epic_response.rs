use tb_core::Epic;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct EpicResponse {
    pub epic: Epic,
}

#[derive(Debug, Serialize)]
pub struct EpicListResponse {
    pub epics: Vec<Epic>,
}
