//! Status column REST API handlers

use crate::api::parse::parse_uuid;
use crate::api::scope::project_scope;
use crate::{
    ApiResult, AppState, CreateStatusRequest, DeleteResponse, StatusListResponse, StatusResponse,
    UserId,
};

use tb_engine::CreateStatusInput;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// GET /api/v1/projects/{project_id}/statuses
///
/// Columns in board order.
pub async fn list_statuses(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
) -> ApiResult<Json<StatusListResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let statuses = tb_engine::list_statuses(&ctx).await?;

    Ok(Json(StatusListResponse { statuses }))
}

/// POST /api/v1/projects/{project_id}/statuses
pub async fn create_status(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
    payload: Result<Json<CreateStatusRequest>, JsonRejection>,
) -> ApiResult<Json<StatusResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let status = tb_engine::create_status(
        &ctx,
        CreateStatusInput {
            name: req.name,
            color: req.color,
            is_done: req.is_done,
        },
    )
    .await?;

    Ok(Json(StatusResponse { status }))
}

/// DELETE /api/v1/projects/{project_id}/statuses/{status_id}
///
/// Only empty columns can go, and never the last non-done one.
pub async fn delete_status(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, status_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let id = parse_uuid(&status_id, "status_id")?;

    tb_engine::delete_status(&ctx, id).await?;

    Ok(Json(DeleteResponse::new(id)))
}
