//! Task REST API handlers

use crate::api::parse::{parse_optional_uuid, parse_patch_uuid, parse_uuid};
use crate::api::scope::project_scope;
use crate::{
    ApiResult, AppState, CreateTaskRequest, DeleteResponse, ListTasksQuery, MoveTaskRequest,
    TaskListResponse, TaskResponse, UpdateTaskRequest, UserId,
};

use tb_core::{Priority, TaskType};
use tb_db::TaskFilter;
use tb_engine::{CreateTaskInput, MoveTarget, UpdateTaskInput};

use std::str::FromStr;

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
};

/// GET /api/v1/projects/{project_id}/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
    query: Result<Query<ListTasksQuery>, QueryRejection>,
) -> ApiResult<Json<TaskListResponse>> {
    let Query(query) = query?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let filter = TaskFilter {
        status_id: parse_optional_uuid(query.status_id.as_deref(), "status_id")?,
        sprint_id: parse_optional_uuid(query.sprint_id.as_deref(), "sprint_id")?,
        epic_id: parse_optional_uuid(query.epic_id.as_deref(), "epic_id")?,
        assignee_id: parse_optional_uuid(query.assignee_id.as_deref(), "assignee_id")?,
    };
    let tasks = tb_engine::list_tasks(&ctx, filter).await?;

    Ok(Json(TaskListResponse { tasks }))
}

/// POST /api/v1/projects/{project_id}/tasks
///
/// Appends the task to the end of its starting column.
pub async fn create_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path(project_id): Path<String>,
    payload: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let mut input = CreateTaskInput::new(req.title);
    input.description = req.description;
    if let Some(task_type) = req.task_type.as_deref() {
        input.task_type = TaskType::from_str(task_type)?;
    }
    if let Some(priority) = req.priority.as_deref() {
        input.priority = Priority::from_str(priority)?;
    }
    input.story_points = req.story_points;
    input.status_id = parse_optional_uuid(req.status_id.as_deref(), "status_id")?;
    input.epic_id = parse_optional_uuid(req.epic_id.as_deref(), "epic_id")?;
    input.sprint_id = parse_optional_uuid(req.sprint_id.as_deref(), "sprint_id")?;
    input.assignee_id = parse_optional_uuid(req.assignee_id.as_deref(), "assignee_id")?;
    input.estimated_hours = req.estimated_hours;
    input.due_date = req.due_date;
    input.start_date = req.start_date;

    let task = tb_engine::create_task(&ctx, input).await?;

    Ok(Json(TaskResponse { task }))
}

/// GET /api/v1/projects/{project_id}/tasks/{task_id}
pub async fn get_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, task_id)): Path<(String, String)>,
) -> ApiResult<Json<TaskResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let task = tb_engine::get_task(&ctx, parse_uuid(&task_id, "task_id")?).await?;

    Ok(Json(TaskResponse { task }))
}

/// PATCH /api/v1/projects/{project_id}/tasks/{task_id}
pub async fn update_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, task_id)): Path<(String, String)>,
    payload: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;
    let task_id = parse_uuid(&task_id, "task_id")?;

    let input = UpdateTaskInput {
        title: req.title,
        description: req.description,
        task_type: req
            .task_type
            .as_deref()
            .map(TaskType::from_str)
            .transpose()?,
        priority: req
            .priority
            .as_deref()
            .map(Priority::from_str)
            .transpose()?,
        story_points: req.story_points,
        status_id: parse_optional_uuid(req.status_id.as_deref(), "status_id")?,
        epic_id: parse_patch_uuid(req.epic_id, "epic_id")?,
        sprint_id: parse_patch_uuid(req.sprint_id, "sprint_id")?,
        assignee_id: parse_patch_uuid(req.assignee_id, "assignee_id")?,
        estimated_hours: req.estimated_hours,
        due_date: req.due_date,
        start_date: req.start_date,
    };
    let task = tb_engine::update_task(&ctx, task_id, input).await?;

    Ok(Json(TaskResponse { task }))
}

/// DELETE /api/v1/projects/{project_id}/tasks/{task_id}
///
/// Closes the gap in the task's column; edges, comments and time entries go
/// with it.
pub async fn delete_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, task_id)): Path<(String, String)>,
) -> ApiResult<Json<DeleteResponse>> {
    let ctx = project_scope(&state, user_id, &project_id)?;
    let id = parse_uuid(&task_id, "task_id")?;

    tb_engine::delete_task(&ctx, id).await?;

    Ok(Json(DeleteResponse::new(id)))
}

/// POST /api/v1/projects/{project_id}/tasks/{task_id}/move
pub async fn move_task(
    State(state): State<AppState>,
    UserId(user_id): UserId,
    Path((project_id, task_id)): Path<(String, String)>,
    payload: Result<Json<MoveTaskRequest>, JsonRejection>,
) -> ApiResult<Json<TaskResponse>> {
    let Json(req) = payload?;
    let ctx = project_scope(&state, user_id, &project_id)?;

    let target = MoveTarget {
        status_id: parse_optional_uuid(req.status_id.as_deref(), "status_id")?,
        position: req.position,
    };
    let task = tb_engine::move_task(&ctx, parse_uuid(&task_id, "task_id")?, target).await?;

    Ok(Json(TaskResponse { task }))
}
