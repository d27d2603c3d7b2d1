//! Sprint lifecycle and sprint analytics REST API handlers

use crate::api::parse::parse_uuid;
use crate::api::scope::project_scope;
use crate::{
    ApiResult, AppState, BurndownQuery, BurndownResponse, CreateSprintRequest, DeleteResponse,
    SprintListResponse, SprintResponse, SprintSummaryResponse, UpdateSprintRequest, UserId,
    VelocityQuery, VelocityResponse,
};

use tb_core::BurndownMode;
use tb_engine::{CreateSprintInput, DEFAULT_VELOCITY_WINDOW, UpdateSprintInput};

use std::str::FromStr;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

/// GET /api/v1/projects/{project_id}/sprints
pub async fn list_sprints(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
) -> ApiResult<Json<SprintListResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let sprints = tb_engine::list_sprints(&ctx).await?;

    Ok(Json(SprintListResponse { sprints }))
}

/// POST /api/v1/projects/{project_id}/sprints
///
/// New sprints start in planning.
pub async fn create_sprint(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
    payload: Result<Json<CreateSprintRequest>, JsonRejection>,
) -> ApiResult<Json<SprintResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let sprint = tb_engine::create_sprint(
        &ctx,
        CreateSprintInput {
            name: req.name,
            goal: req.goal,
            start_date: req.start_date,
            end_date: req.end_date,
        },
    )
    .await?;

    Ok(Json(SprintResponse { sprint }))
}

/// GET /api/v1/projects/{project_id}/sprints/{sprint_id}
pub async fn get_sprint(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, sprint_id)): Path<(String, String)>,
) -> ApiResult<Json<SprintResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let sprint = tb_engine::get_sprint(&ctx, parse_uuid(&sprint_id, "sprint_id")?).await?;

    Ok(Json(SprintResponse { sprint }))
}

/// PATCH /api/v1/projects/{project_id}/sprints/{sprint_id}
pub async fn update_sprint(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, sprint_id)): Path<(String, String)>,
    payload: Result<Json<UpdateSprintRequest>, JsonRejection>,
) -> ApiResult<Json<SprintResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let input = UpdateSprintInput {
        name: req.name,
        goal: req.goal,
        start_date: req.start_date,
        end_date: req.end_date,
    };
    let sprint =
        tb_engine::update_sprint(&ctx, parse_uuid(&sprint_id, "sprint_id")?, input).await?;

    Ok(Json(SprintResponse { sprint }))
}

/// DELETE /api/v1/projects/{project_id}/sprints/{sprint_id}
///
/// Planning sprints only. Member tasks return to the backlog.
pub async fn delete_sprint(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, sprint_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let id = parse_uuid(&sprint_id, "sprint_id")?;

    tb_engine::delete_sprint(&ctx, id).await?;

    Ok(Json(DeleteResponse::new(id)))
}

/// POST /api/v1/projects/{project_id}/sprints/{sprint_id}/start
///
/// 409 while another sprint of the project is active.
pub async fn start_sprint(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, sprint_id)): Path<(String, String)>,
) -> ApiResult<Json<SprintResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let sprint = tb_engine::start_sprint(&ctx, parse_uuid(&sprint_id, "sprint_id")?).await?;

    Ok(Json(SprintResponse { sprint }))
}

/// POST /api/v1/projects/{project_id}/sprints/{sprint_id}/complete
pub async fn complete_sprint(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, sprint_id)): Path<(String, String)>,
) -> ApiResult<Json<SprintResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let sprint = tb_engine::complete_sprint(&ctx, parse_uuid(&sprint_id, "sprint_id")?).await?;

    Ok(Json(SprintResponse { sprint }))
}

/// GET /api/v1/projects/{project_id}/sprints/{sprint_id}/summary
pub async fn get_sprint_summary(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, sprint_id)): Path<(String, String)>,
) -> ApiResult<Json<SprintSummaryResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let summary =
        tb_engine::get_sprint_summary(&ctx, parse_uuid(&sprint_id, "sprint_id")?).await?;

    Ok(Json(SprintSummaryResponse { summary }))
}

/// GET /api/v1/projects/{project_id}/sprints/{sprint_id}/burndown?mode=burnup
pub async fn get_burndown(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, sprint_id)): Path<(String, String)>,
    query: Result<Query<BurndownQuery>, QueryRejection>,
) -> ApiResult<Json<BurndownResponse>> {
    let Query(query) = query?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let mode = match query.mode.as_deref() {
        Some(mode) => BurndownMode::from_str(mode)?,
        None => BurndownMode::default(),
    };
    let chart =
        tb_engine::get_burndown(&ctx, parse_uuid(&sprint_id, "sprint_id")?, mode).await?;

    Ok(Json(BurndownResponse { chart }))
}

/// GET /api/v1/projects/{project_id}/velocity?last_n=5
pub async fn get_velocity(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
    query: Result<Query<VelocityQuery>, QueryRejection>,
) -> ApiResult<Json<VelocityResponse>> {
    let Query(query) = query?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let last_n = query.last_n.unwrap_or(DEFAULT_VELOCITY_WINDOW);
    let velocity = tb_engine::get_velocity(&ctx, last_n).await?;

    Ok(Json(VelocityResponse { velocity }))
}
