use crate::handlers::lookup::{load_project, load_sprint};
use crate::validation::Validator;
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_read, db_write};

use tb_core::{Sprint, SprintMetrics, SprintStatus};
use tb_db::{ProjectRepository, SprintRepository, StatusRepository, TaskRepository};

use std::collections::HashSet;

use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info};
use sqlx::SqliteConnection;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateSprintInput {
    pub name: String,
    pub goal: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateSprintInput {
    pub name: Option<String>,
    pub goal: Option<Option<String>>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Takes the project guard in the caller's transaction, so a sprint state
/// check and the write depending on it cannot interleave with another writer.
async fn guard_project(
    conn: &mut SqliteConnection,
    project_id: Uuid,
) -> EngineErrorResult<()> {
    if !ProjectRepository::bump_revision(&mut *conn, project_id).await? {
        return Err(EngineError::not_found(format!(
            "project {} not found",
            project_id
        )));
    }
    Ok(())
}

pub async fn create_sprint(
    ctx: &HandlerContext,
    input: CreateSprintInput,
) -> EngineErrorResult<Sprint> {
    debug!("{} CreateSprint starting", ctx.log_prefix());

    let project_id = ctx.project()?;
    let validator = Validator::new(&ctx.validation);
    let name = validator.title(&input.name, "name")?;
    validator.description(input.goal.as_deref(), "goal")?;
    Sprint::validate_dates(input.start_date, input.end_date)?;

    let sprint = Sprint::new(
        project_id,
        name,
        input.goal,
        input.start_date,
        input.end_date,
        ctx.user_id,
    );

    let sprint_ref = &sprint;
    db_write(ctx, "CreateSprint", move || async move {
        let mut tx = ctx.pool.begin().await?;
        guard_project(&mut tx, project_id).await?;
        SprintRepository::create(&mut *tx, sprint_ref).await?;
        tx.commit().await?;
        Ok::<_, EngineError>(())
    })
    .await?;

    info!(
        "{} Created sprint '{}' ({} to {})",
        ctx.log_prefix(),
        sprint.name,
        sprint.start_date,
        sprint.end_date
    );

    Ok(sprint)
}

/// Edits name, goal and dates of a sprint that has not completed.
pub async fn update_sprint(
    ctx: &HandlerContext,
    sprint_id: Uuid,
    input: UpdateSprintInput,
) -> EngineErrorResult<Sprint> {
    debug!("{} UpdateSprint starting", ctx.log_prefix());

    let project_id = ctx.project()?;
    let validator = Validator::new(&ctx.validation);
    let name = input
        .name
        .as_deref()
        .map(|name| validator.title(name, "name"))
        .transpose()?;
    if let Some(goal) = &input.goal {
        validator.description(goal.as_deref(), "goal")?;
    }

    let (name, input) = (&name, &input);
    let sprint = db_write(ctx, "UpdateSprint", move || async move {
        let mut tx = ctx.pool.begin().await?;
        guard_project(&mut tx, project_id).await?;
        let mut sprint = load_sprint(&mut tx, project_id, sprint_id).await?;

        if !sprint.is_editable() {
            return Err(EngineError::invalid_state(format!(
                "sprint '{}' is completed and can no longer be edited",
                sprint.name
            )));
        }

        if let Some(name) = name {
            sprint.name = name.clone();
        }
        if let Some(goal) = &input.goal {
            sprint.goal = goal.clone();
        }
        if let Some(start_date) = input.start_date {
            sprint.start_date = start_date;
        }
        if let Some(end_date) = input.end_date {
            sprint.end_date = end_date;
        }
        Sprint::validate_dates(sprint.start_date, sprint.end_date)?;
        sprint.updated_at = Utc::now();

        SprintRepository::update(&mut *tx, &sprint).await?;
        tx.commit().await?;
        Ok(sprint)
    })
    .await?;

    info!("{} Updated sprint '{}'", ctx.log_prefix(), sprint.name);

    Ok(sprint)
}

/// Deletes a sprint still in planning. Member tasks stay and lose their
/// `sprint_id`.
pub async fn delete_sprint(ctx: &HandlerContext, sprint_id: Uuid) -> EngineErrorResult<()> {
    debug!("{} DeleteSprint starting", ctx.log_prefix());

    let project_id = ctx.project()?;

    db_write(ctx, "DeleteSprint", move || async move {
        let mut tx = ctx.pool.begin().await?;
        guard_project(&mut tx, project_id).await?;
        let sprint = load_sprint(&mut tx, project_id, sprint_id).await?;

        if sprint.status != SprintStatus::Planning {
            return Err(EngineError::invalid_state(format!(
                "sprint '{}' is {}; only planning sprints can be deleted",
                sprint.name,
                sprint.status.as_str()
            )));
        }

        SprintRepository::delete(&mut *tx, sprint.id).await?;
        tx.commit().await?;
        Ok(())
    })
    .await?;

    info!("{} Deleted sprint {}", ctx.log_prefix(), sprint_id);

    Ok(())
}

/// PLANNING -> ACTIVE. Fails with `Conflict` while another sprint of the
/// project is active.
pub async fn start_sprint(ctx: &HandlerContext, sprint_id: Uuid) -> EngineErrorResult<Sprint> {
    debug!("{} StartSprint starting", ctx.log_prefix());

    let project_id = ctx.project()?;

    let sprint = db_write(ctx, "StartSprint", move || {
        transition_sprint(ctx, project_id, sprint_id, SprintStatus::Active)
    })
    .await?;

    info!("{} Started sprint '{}'", ctx.log_prefix(), sprint.name);

    Ok(sprint)
}

/// ACTIVE -> COMPLETED. Unfinished member tasks keep their sprint.
pub async fn complete_sprint(ctx: &HandlerContext, sprint_id: Uuid) -> EngineErrorResult<Sprint> {
    debug!("{} CompleteSprint starting", ctx.log_prefix());

    let project_id = ctx.project()?;

    let sprint = db_write(ctx, "CompleteSprint", move || {
        transition_sprint(ctx, project_id, sprint_id, SprintStatus::Completed)
    })
    .await?;

    info!("{} Completed sprint '{}'", ctx.log_prefix(), sprint.name);

    Ok(sprint)
}

async fn transition_sprint(
    ctx: &HandlerContext,
    project_id: Uuid,
    sprint_id: Uuid,
    next: SprintStatus,
) -> EngineErrorResult<Sprint> {
    let now: DateTime<Utc> = Utc::now();
    let mut tx = ctx.pool.begin().await?;

    guard_project(&mut tx, project_id).await?;
    let mut sprint = load_sprint(&mut tx, project_id, sprint_id).await?;

    match next {
        SprintStatus::Active => {
            sprint.start(now)?;
            if let Some(active) = SprintRepository::find_active(&mut *tx, project_id).await? {
                return Err(EngineError::conflict(format!(
                    "sprint '{}' is already active",
                    active.name
                )));
            }
        }
        SprintStatus::Completed => sprint.complete(now)?,
        SprintStatus::Planning => {
            return Err(EngineError::invalid_state(
                "a sprint never returns to planning",
            ));
        }
    }

    SprintRepository::update(&mut *tx, &sprint)
        .await
        .map_err(|e| {
            if e.is_unique_violation() {
                EngineError::conflict("another sprint of the project is already active")
            } else {
                EngineError::from(e)
            }
        })?;

    tx.commit().await?;
    Ok(sprint)
}

pub async fn get_sprint(ctx: &HandlerContext, sprint_id: Uuid) -> EngineErrorResult<Sprint> {
    let project_id = ctx.project()?;

    db_read(ctx, "GetSprint", move || async move {
        let mut conn = ctx.pool.acquire().await?;
        load_sprint(&mut conn, project_id, sprint_id).await
    })
    .await
}

pub async fn list_sprints(ctx: &HandlerContext) -> EngineErrorResult<Vec<Sprint>> {
    let project_id = ctx.project()?;

    db_read(ctx, "ListSprints", move || async move {
        let mut conn = ctx.pool.acquire().await?;
        load_project(&mut conn, project_id).await?;
        Ok::<_, EngineError>(SprintRepository::list_by_project(&mut *conn, project_id).await?)
    })
    .await
}

/// Point and day aggregates of a sprint, as of today (UTC).
pub async fn get_sprint_summary(
    ctx: &HandlerContext,
    sprint_id: Uuid,
) -> EngineErrorResult<SprintMetrics> {
    get_sprint_summary_as_of(ctx, sprint_id, Utc::now().date_naive()).await
}

pub async fn get_sprint_summary_as_of(
    ctx: &HandlerContext,
    sprint_id: Uuid,
    today: NaiveDate,
) -> EngineErrorResult<SprintMetrics> {
    let project_id = ctx.project()?;

    db_read(ctx, "GetSprintSummary", move || async move {
        let mut tx = ctx.pool.begin().await?;
        let sprint = load_sprint(&mut tx, project_id, sprint_id).await?;
        let tasks = TaskRepository::list_by_sprint(&mut *tx, sprint.id).await?;
        let done: HashSet<Uuid> = StatusRepository::list_by_project(&mut *tx, project_id)
            .await?
            .into_iter()
            .filter(|s| s.is_done)
            .map(|s| s.id)
            .collect();

        Ok::<_, EngineError>(SprintMetrics::compute(&sprint, &tasks, &done, today))
    })
    .await
}
