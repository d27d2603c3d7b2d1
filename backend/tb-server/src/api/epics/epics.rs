//! Epic REST API handlers

use crate::api::parse::parse_uuid;
use crate::api::scope::project_scope;
use crate::{
    ApiResult, AppState, CreateEpicRequest, DeleteResponse, EpicListResponse, EpicResponse,
    UpdateEpicRequest, UserId,
};

use tb_core::EpicStatus;
use tb_engine::{CreateEpicInput, UpdateEpicInput};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// GET /api/v1/projects/{project_id}/epics
pub async fn list_epics(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
) -> ApiResult<Json<EpicListResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let epics = tb_engine::list_epics(&ctx).await?;

    Ok(Json(EpicListResponse { epics }))
}

/// POST /api/v1/projects/{project_id}/epics
pub async fn create_epic(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
    payload: Result<Json<CreateEpicRequest>, JsonRejection>,
) -> ApiResult<Json<EpicResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let epic = tb_engine::create_epic(
        &ctx,
        CreateEpicInput {
            title: req.title,
            description: req.description,
            color: req.color,
            start_date: req.start_date,
            end_date: req.end_date,
        },
    )
    .await?;

    Ok(Json(EpicResponse { epic }))
}

/// GET /api/v1/projects/{project_id}/epics/{epic_id}
pub async fn get_epic(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, epic_id)): Path<(String, String)>,
) -> ApiResult<Json<EpicResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let epic = tb_engine::get_epic(&ctx, parse_uuid(&epic_id, "epic_id")?).await?;

    Ok(Json(EpicResponse { epic }))
}

/// PATCH /api/v1/projects/{project_id}/epics/{epic_id}
pub async fn update_epic(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, epic_id)): Path<(String, String)>,
    payload: Result<Json<UpdateEpicRequest>, JsonRejection>,
) -> ApiResult<Json<EpicResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let input = UpdateEpicInput {
        title: req.title,
        description: req.description,
        color: req.color,
        status: req
            .status
            .as_deref()
            .map(EpicStatus::from_str)
            .transpose()?,
        start_date: req.start_date,
        end_date: req.end_date,
    };
    let epic = tb_engine::update_epic(&ctx, parse_uuid(&epic_id, "epic_id")?, input).await?;

    Ok(Json(EpicResponse { epic }))
}

/// DELETE /api/v1/projects/{project_id}/epics/{epic_id}
///
/// Member tasks stay on the board without an epic.
pub async fn delete_epic(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, epic_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let id = parse_uuid(&epic_id, "epic_id")?;

    tb_engine::delete_epic(&ctx, id).await?;

    Ok(Json(DeleteResponse::new(id)))
}
