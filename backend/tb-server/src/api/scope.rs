use crate::api::parse::parse_uuid;
use crate::{ApiResult, AppState};

use tb_engine::HandlerContext;

use uuid::Uuid;

/// Engine context for a request under `/api/v1/projects/{project_id}`.
#[track_caller]
pub fn project_scope(state: &AppState, user_id: Uuid, project_id: &str) -> ApiResult<HandlerContext> {
    let project_id = parse_uuid(project_id, "project_id")?;
    Ok(state.project_context(user_id, project_id))
}
