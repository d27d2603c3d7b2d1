//! Time tracking REST API handlers

use crate::api::parse::parse_uuid;
use crate::api::scope::project_scope;
use crate::{
    ApiResult, AppState, LogTimeRequest, TimeEntryListResponse, TimeEntryResponse, UserId,
};

use tb_engine::LogTimeInput;

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
};
use chrono::Utc;

/// GET /api/v1/projects/{project_id}/tasks/{task_id}/time-entries
pub async fn list_time_entries(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, task_id)): Path<(String, String)>,
) -> ApiResult<Json<TimeEntryListResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let time_entries =
        tb_engine::list_time_entries(&ctx, parse_uuid(&task_id, "task_id")?).await?;
    let total_hours = time_entries.iter().map(|e| e.hours).sum();

    Ok(Json(TimeEntryListResponse {
        time_entries,
        total_hours,
    }))
}

/// POST /api/v1/projects/{project_id}/tasks/{task_id}/time-entries
pub async fn log_time(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, task_id)): Path<(String, String)>,
    payload: Result<Json<LogTimeRequest>, JsonRejection>,
) -> ApiResult<Json<TimeEntryResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let input = LogTimeInput {
        hours: req.hours,
        spent_on: req.spent_on.unwrap_or_else(|| Utc::now().date_naive()),
        note: req.note,
    };
    let time_entry = tb_engine::log_time(&ctx, parse_uuid(&task_id, "task_id")?, input).await?;

    Ok(Json(TimeEntryResponse { time_entry }))
}
