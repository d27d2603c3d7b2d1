//! Project and membership REST API handlers

use crate::api::parse::parse_uuid;
use crate::api::scope::project_scope;
use crate::{
    AddMemberRequest, ApiResult, AppState, CreateProjectRequest, MemberListResponse,
    MemberResponse, ProjectListResponse, ProjectResponse, UserId,
};

use tb_core::MemberRole;
use tb_engine::{AddMemberInput, CreateProjectInput};

use std::str::FromStr;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};

/// GET /api/v1/projects
pub async fn list_projects(
    State(state): State<AppState>,
    UserId(user_id): UserId,
) -> ApiResult<Json<ProjectListResponse>> {
    let ctx = state.context(user_id);
    let projects = tb_engine::list_projects(&ctx).await?;

    Ok(Json(ProjectListResponse { projects }))
}

/// POST /api/v1/projects
///
/// Creates the project with its default statuses; the caller joins as admin.
pub async fn create_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    payload: Result<Json<CreateProjectRequest>, JsonRejection>,
) -> ApiResult<Json<ProjectResponse>> {
    let Json(req) = payload?;
    let ctx = state.context(user_id);

    let project = tb_engine::create_project(
        &ctx,
        CreateProjectInput {
            key: req.key,
            name: req.name,
            description: req.description,
        },
    )
    .await?;

    Ok(Json(ProjectResponse { project }))
}

/// GET /api/v1/projects/{project_id}
pub async fn get_project(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
) -> ApiResult<Json<ProjectResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let project = tb_engine::get_project(&ctx).await?;

    Ok(Json(ProjectResponse { project }))
}

/// GET /api/v1/projects/{project_id}/members
pub async fn list_members(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
) -> ApiResult<Json<MemberListResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let members = tb_engine::list_members(&ctx).await?;

    Ok(Json(MemberListResponse { members }))
}

/// POST /api/v1/projects/{project_id}/members
pub async fn add_member(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
    payload: Result<Json<AddMemberRequest>, JsonRejection>,
) -> ApiResult<Json<MemberResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let member = tb_engine::add_member(
        &ctx,
        AddMemberInput {
            user_id: parse_uuid(&req.user_id, "user_id")?,
            role: MemberRole::from_str(&req.role)?,
        },
    )
    .await?;

    Ok(Json(MemberResponse { member }))
}
