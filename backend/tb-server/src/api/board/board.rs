//! Board view REST API handler

use crate::api::parse::parse_optional_uuid;
use crate::api::scope::project_scope;
use crate::{ApiResult, AppState, BoardQuery, BoardResponse, UserId};

use tb_core::BoardFilter;

use axum::{
    Json,
    extract::{Path, Query, State, rejection::QueryRejection},
};

/// GET /api/v1/projects/{project_id}/board
///
/// One column per status, even when the filter leaves it empty.
pub async fn get_board(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
    query: Result<Query<BoardQuery>, QueryRejection>,
) -> ApiResult<Json<BoardResponse>> {
    let Query(query) = query?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let filter = BoardFilter {
        sprint_id: parse_optional_uuid(query.sprint_id.as_deref(), "sprint_id")?,
        epic_id: parse_optional_uuid(query.epic_id.as_deref(), "epic_id")?,
        assignee_id: parse_optional_uuid(query.assignee_id.as_deref(), "assignee_id")?,
    };
    let board = tb_engine::get_board(&ctx, filter).await?;

    Ok(Json(BoardResponse { board }))
}
