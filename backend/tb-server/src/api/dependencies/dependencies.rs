//! Dependency graph REST API handlers

use crate::api::parse::parse_uuid;
use crate::api::scope::project_scope;
use crate::{
    ApiResult, AppState, CreateDependencyRequest, DependencyListResponse, DependencyResponse,
    RemoveDependencyResponse, UserId,
};

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// POST /api/v1/projects/{project_id}/dependencies
///
/// 422 with the offending path when the edge would close a cycle.
pub async fn add_dependency(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
    payload: Result<Json<CreateDependencyRequest>, JsonRejection>,
) -> ApiResult<Json<DependencyResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let dependency = tb_engine::add_dependency(
        &ctx,
        parse_uuid(&req.from_task_id, "from_task_id")?,
        parse_uuid(&req.to_task_id, "to_task_id")?,
    )
    .await?;

    Ok(Json(DependencyResponse { dependency }))
}

/// DELETE /api/v1/projects/{project_id}/dependencies/{from_task_id}/{to_task_id}
///
/// Idempotent: removing a missing edge succeeds with `removed: false`.
pub async fn remove_dependency(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, from_task_id, to_task_id)): Path<(String, String, String)>,
) -> ApiResult<Json<RemoveDependencyResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;

    let removed = tb_engine::remove_dependency(
        &ctx,
        parse_uuid(&from_task_id, "from_task_id")?,
        parse_uuid(&to_task_id, "to_task_id")?,
    )
    .await?;

    Ok(Json(RemoveDependencyResponse { removed }))
}

/// GET /api/v1/projects/{project_id}/tasks/{task_id}/dependencies
pub async fn list_dependencies(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, task_id)): Path<(String, String)>,
) -> ApiResult<Json<DependencyListResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let dependencies =
        tb_engine::list_dependencies(&ctx, parse_uuid(&task_id, "task_id")?).await?;

    Ok(Json(DependencyListResponse { dependencies }))
}
