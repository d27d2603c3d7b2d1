use crate::handlers::lookup::{
    as_field_error, check_references, load_project, load_status, load_task,
};
use crate::handlers::move_task::{compact_column, relocate};
use crate::validation::Validator;
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_read, db_write};

use tb_core::{Priority, Task, TaskType};
use tb_db::{ProjectRepository, StatusRepository, TaskFilter, TaskRepository};

use chrono::{NaiveDate, Utc};
use log::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateTaskInput {
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub priority: Priority,
    pub story_points: Option<i64>,
    /// Starting column; the first non-done column when absent
    pub status_id: Option<Uuid>,
    pub epic_id: Option<Uuid>,
    pub sprint_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
    pub estimated_hours: Option<f64>,
    pub due_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
}

impl CreateTaskInput {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            task_type: TaskType::Task,
            priority: Priority::Medium,
            story_points: None,
            status_id: None,
            epic_id: None,
            sprint_id: None,
            assignee_id: None,
            estimated_hours: None,
            due_date: None,
            start_date: None,
        }
    }
}

/// Partial update. `None` leaves a field alone; `Some(None)` clears a
/// nullable one. A new `status_id` appends the task to that column.
#[derive(Debug, Clone, Default)]
pub struct UpdateTaskInput {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub task_type: Option<TaskType>,
    pub priority: Option<Priority>,
    pub story_points: Option<Option<i64>>,
    pub status_id: Option<Uuid>,
    pub epic_id: Option<Option<Uuid>>,
    pub sprint_id: Option<Option<Uuid>>,
    pub assignee_id: Option<Option<Uuid>>,
    pub estimated_hours: Option<Option<f64>>,
    pub due_date: Option<Option<NaiveDate>>,
    pub start_date: Option<Option<NaiveDate>>,
}

/// Creates a task at the end of its starting column with the next task code.
pub async fn create_task(ctx: &HandlerContext, input: CreateTaskInput) -> EngineErrorResult<Task> {
    debug!("{} CreateTask starting", ctx.log_prefix());

    let project_id = ctx.project()?;
    let validator = Validator::new(&ctx.validation);
    let title = validator.title(&input.title, "title")?;
    validator.description(input.description.as_deref(), "description")?;
    validator.story_points(input.story_points)?;
    validator.hours(input.estimated_hours, "estimated_hours")?;

    let (title, input) = (&title, &input);
    let task = db_write(ctx, "CreateTask", move || {
        insert_task(ctx, project_id, title, input)
    })
    .await?;

    info!(
        "{} Created task {} in status {} at position {}",
        ctx.log_prefix(),
        task.code,
        task.status_id,
        task.position
    );

    Ok(task)
}

async fn insert_task(
    ctx: &HandlerContext,
    project_id: Uuid,
    title: &str,
    input: &CreateTaskInput,
) -> EngineErrorResult<Task> {
    let mut tx = ctx.pool.begin().await?;

    let number = ProjectRepository::allocate_task_number(&mut *tx, project_id)
        .await?
        .ok_or_else(|| EngineError::not_found(format!("project {} not found", project_id)))?;
    let project = load_project(&mut tx, project_id).await?;

    let status = match input.status_id {
        Some(status_id) => {
            let status = load_status(&mut tx, project_id, status_id)
                .await
                .map_err(|e| as_field_error(e, "status_id"))?;
            if status.is_done {
                return Err(EngineError::validation(
                    format!("tasks cannot start in done status '{}'", status.name),
                    "status_id",
                ));
            }
            status
        }
        None => StatusRepository::list_by_project(&mut *tx, project_id)
            .await?
            .into_iter()
            .find(|s| !s.is_done)
            .ok_or_else(|| {
                EngineError::invalid_state("project has no non-done status to start tasks in")
            })?,
    };

    check_references(
        &mut tx,
        project_id,
        input.epic_id,
        input.sprint_id,
        input.assignee_id,
    )
    .await?;

    if !StatusRepository::lock_column(&mut *tx, status.id).await? {
        return Err(EngineError::not_found(format!(
            "status {} not found",
            status.id
        )));
    }
    let position = TaskRepository::column(&mut *tx, status.id).await?.len() as i64;

    let mut task = Task::new(
        project_id,
        project.task_code(number),
        title.to_string(),
        input.task_type,
        input.priority,
        status.id,
        position,
        ctx.user_id,
    );
    task.description = input.description.clone();
    task.story_points = input.story_points;
    task.epic_id = input.epic_id;
    task.sprint_id = input.sprint_id;
    task.assignee_id = input.assignee_id;
    task.estimated_hours = input.estimated_hours;
    task.due_date = input.due_date;
    task.start_date = input.start_date;

    TaskRepository::create(&mut *tx, &task).await?;

    tx.commit().await?;
    Ok(task)
}

/// Applies a partial update. A status change routes through the move path and
/// is the only way `completed_at` changes.
pub async fn update_task(
    ctx: &HandlerContext,
    task_id: Uuid,
    input: UpdateTaskInput,
) -> EngineErrorResult<Task> {
    debug!("{} UpdateTask starting", ctx.log_prefix());

    let project_id = ctx.project()?;
    let validator = Validator::new(&ctx.validation);
    let title = input
        .title
        .as_deref()
        .map(|title| validator.title(title, "title"))
        .transpose()?;
    if let Some(description) = &input.description {
        validator.description(description.as_deref(), "description")?;
    }
    if let Some(points) = input.story_points {
        validator.story_points(points)?;
    }
    if let Some(hours) = input.estimated_hours {
        validator.hours(hours, "estimated_hours")?;
    }

    let (title, input) = (&title, &input);
    let task = db_write(ctx, "UpdateTask", move || {
        update_task_once(ctx, project_id, task_id, title.as_deref(), input)
    })
    .await?;

    info!("{} Updated task {}", ctx.log_prefix(), task.code);

    Ok(task)
}

async fn update_task_once(
    ctx: &HandlerContext,
    project_id: Uuid,
    task_id: Uuid,
    title: Option<&str>,
    input: &UpdateTaskInput,
) -> EngineErrorResult<Task> {
    let now = Utc::now();
    let mut tx = ctx.pool.begin().await?;

    if !TaskRepository::claim(&mut *tx, project_id, task_id, now).await? {
        return Err(EngineError::not_found(format!("task {} not found", task_id)));
    }
    let mut task = load_task(&mut tx, project_id, task_id).await?;

    // Only references that change are checked, so a task may stay in a sprint
    // that has since completed.
    let changed = |current: Option<Uuid>, requested: Option<Option<Uuid>>| {
        requested.filter(|next| *next != current).flatten()
    };
    check_references(
        &mut tx,
        project_id,
        changed(task.epic_id, input.epic_id),
        changed(task.sprint_id, input.sprint_id),
        changed(task.assignee_id, input.assignee_id),
    )
    .await?;

    if let Some(title) = title {
        task.title = title.to_string();
    }
    if let Some(description) = &input.description {
        task.description = description.clone();
    }
    if let Some(task_type) = input.task_type {
        task.task_type = task_type;
    }
    if let Some(priority) = input.priority {
        task.priority = priority;
    }
    if let Some(points) = input.story_points {
        task.story_points = points;
    }
    if let Some(epic_id) = input.epic_id {
        task.epic_id = epic_id;
    }
    if let Some(sprint_id) = input.sprint_id {
        task.sprint_id = sprint_id;
    }
    if let Some(assignee_id) = input.assignee_id {
        task.assignee_id = assignee_id;
    }
    if let Some(hours) = input.estimated_hours {
        task.estimated_hours = hours;
    }
    if let Some(due_date) = input.due_date {
        task.due_date = due_date;
    }
    if let Some(start_date) = input.start_date {
        task.start_date = start_date;
    }
    task.updated_at = now;

    TaskRepository::update_details(&mut *tx, &task).await?;

    if let Some(status_id) = input.status_id
        && status_id != task.status_id
    {
        load_status(&mut tx, project_id, status_id)
            .await
            .map_err(|e| as_field_error(e, "status_id"))?;
        relocate(&mut tx, &task, status_id, i64::MAX, now).await?;
    }

    let updated = load_task(&mut tx, project_id, task_id).await?;
    tx.commit().await?;
    Ok(updated)
}

/// Deletes a task and closes the gap it leaves. Edges, comments and time
/// entries go with it.
pub async fn delete_task(ctx: &HandlerContext, task_id: Uuid) -> EngineErrorResult<()> {
    debug!("{} DeleteTask starting", ctx.log_prefix());

    let project_id = ctx.project()?;

    let task = db_write(ctx, "DeleteTask", move || async move {
        let mut tx = ctx.pool.begin().await?;

        if !TaskRepository::claim(&mut *tx, project_id, task_id, Utc::now()).await? {
            return Err(EngineError::not_found(format!("task {} not found", task_id)));
        }
        let task = load_task(&mut tx, project_id, task_id).await?;

        if !StatusRepository::lock_column(&mut *tx, task.status_id).await? {
            return Err(EngineError::not_found(format!(
                "status {} not found",
                task.status_id
            )));
        }
        TaskRepository::delete(&mut *tx, task.id).await?;
        compact_column(&mut tx, task.status_id).await?;

        tx.commit().await?;
        Ok(task)
    })
    .await?;

    info!("{} Deleted task {}", ctx.log_prefix(), task.code);

    Ok(())
}

pub async fn get_task(ctx: &HandlerContext, task_id: Uuid) -> EngineErrorResult<Task> {
    let project_id = ctx.project()?;

    db_read(ctx, "GetTask", move || async move {
        let mut conn = ctx.pool.acquire().await?;
        load_task(&mut conn, project_id, task_id).await
    })
    .await
}

/// Tasks of the project matching every given filter, in board order.
pub async fn list_tasks(ctx: &HandlerContext, filter: TaskFilter) -> EngineErrorResult<Vec<Task>> {
    let project_id = ctx.project()?;
    let filter = &filter;

    db_read(ctx, "ListTasks", move || async move {
        let mut conn = ctx.pool.acquire().await?;
        load_project(&mut conn, project_id).await?;
        Ok::<_, EngineError>(TaskRepository::list_by_project(&mut *conn, project_id, filter).await?)
    })
    .await
}
