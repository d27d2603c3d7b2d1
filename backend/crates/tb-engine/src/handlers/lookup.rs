//! Scoped loaders shared by the handlers. An entity that exists but belongs to
//! another project is reported exactly like a missing one.

use crate::{EngineError, Result as EngineErrorResult};

use tb_core::{Epic, Project, Sprint, Status, Task};
use tb_db::{
    EpicRepository, ProjectMemberRepository, ProjectRepository, SprintRepository,
    StatusRepository, TaskRepository,
};

use sqlx::SqliteConnection;
use uuid::Uuid;

pub(crate) async fn load_project(
    conn: &mut SqliteConnection,
    project_id: Uuid,
) -> EngineErrorResult<Project> {
    ProjectRepository::find_by_id(&mut *conn, project_id)
        .await?
        .ok_or_else(|| EngineError::not_found(format!("project {} not found", project_id)))
}

pub(crate) async fn load_task(
    conn: &mut SqliteConnection,
    project_id: Uuid,
    task_id: Uuid,
) -> EngineErrorResult<Task> {
    TaskRepository::find_by_id(&mut *conn, task_id)
        .await?
        .filter(|task| task.project_id == project_id)
        .ok_or_else(|| EngineError::not_found(format!("task {} not found", task_id)))
}

pub(crate) async fn load_status(
    conn: &mut SqliteConnection,
    project_id: Uuid,
    status_id: Uuid,
) -> EngineErrorResult<Status> {
    StatusRepository::find_by_id(&mut *conn, status_id)
        .await?
        .filter(|status| status.project_id == project_id)
        .ok_or_else(|| EngineError::not_found(format!("status {} not found", status_id)))
}

pub(crate) async fn load_sprint(
    conn: &mut SqliteConnection,
    project_id: Uuid,
    sprint_id: Uuid,
) -> EngineErrorResult<Sprint> {
    SprintRepository::find_by_id(&mut *conn, sprint_id)
        .await?
        .filter(|sprint| sprint.project_id == project_id)
        .ok_or_else(|| EngineError::not_found(format!("sprint {} not found", sprint_id)))
}

pub(crate) async fn load_epic(
    conn: &mut SqliteConnection,
    project_id: Uuid,
    epic_id: Uuid,
) -> EngineErrorResult<Epic> {
    EpicRepository::find_by_id(&mut *conn, epic_id)
        .await?
        .filter(|epic| epic.project_id == project_id)
        .ok_or_else(|| EngineError::not_found(format!("epic {} not found", epic_id)))
}

/// Rewrites a NotFound from a field reference as a validation failure on
/// that field.
pub(crate) fn as_field_error(error: EngineError, field: &str) -> EngineError {
    match error {
        EngineError::NotFound { message, .. } => EngineError::validation(message, field),
        other => other,
    }
}

/// References a task may carry: epic and sprint of the same project, an
/// assignee who is a project member, and a sprint that still accepts work.
pub(crate) async fn check_references(
    conn: &mut SqliteConnection,
    project_id: Uuid,
    epic_id: Option<Uuid>,
    sprint_id: Option<Uuid>,
    assignee_id: Option<Uuid>,
) -> EngineErrorResult<()> {
    if let Some(epic_id) = epic_id {
        load_epic(conn, project_id, epic_id)
            .await
            .map_err(|e| as_field_error(e, "epic_id"))?;
    }

    if let Some(sprint_id) = sprint_id {
        let sprint = load_sprint(conn, project_id, sprint_id)
            .await
            .map_err(|e| as_field_error(e, "sprint_id"))?;
        if !sprint.accepts_tasks() {
            return Err(EngineError::invalid_state(format!(
                "sprint '{}' is {} and accepts no tasks",
                sprint.name,
                sprint.status.as_str()
            )));
        }
    }

    if let Some(assignee_id) = assignee_id
        && ProjectMemberRepository::find(&mut *conn, project_id, assignee_id)
            .await?
            .is_none()
    {
        return Err(EngineError::validation(
            format!("assignee {} is not a project member", assignee_id),
            "assignee_id",
        ));
    }

    Ok(())
}
