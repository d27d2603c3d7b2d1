//! Task comment REST API handlers

use crate::api::parse::parse_uuid;
use crate::api::scope::project_scope;
use crate::{
    ApiResult, AppState, CommentListResponse, CommentResponse, CreateCommentRequest, UserId,
};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// GET /api/v1/projects/{project_id}/tasks/{task_id}/comments
///
/// Oldest first.
pub async fn list_comments(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, task_id)): Path<(String, String)>,
) -> ApiResult<Json<CommentListResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let comments = tb_engine::list_comments(&ctx, parse_uuid(&task_id, "task_id")?).await?;

    Ok(Json(CommentListResponse { comments }))
}

/// POST /api/v1/projects/{project_id}/tasks/{task_id}/comments
pub async fn add_comment(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, task_id)): Path<(String, String)>,
    payload: Result<Json<CreateCommentRequest>, JsonRejection>,
) -> ApiResult<Json<CommentResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let comment =
        tb_engine::add_comment(&ctx, parse_uuid(&task_id, "task_id")?, &req.body).await?;

    Ok(Json(CommentResponse { comment }))
}
