use crate::handlers::lookup::{load_epic, load_project};
use crate::validation::Validator;
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_read, db_write};

use tb_core::{Epic, EpicStatus};
use tb_db::{EpicRepository, ProjectRepository};

use chrono::{NaiveDate, Utc};
use log::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct CreateEpicInput {
    pub title: String,
    pub description: Option<String>,
    pub color: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEpicInput {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub color: Option<Option<String>>,
    pub status: Option<EpicStatus>,
    pub start_date: Option<Option<NaiveDate>>,
    pub end_date: Option<Option<NaiveDate>>,
}

#[track_caller]
fn check_date_range(start: Option<NaiveDate>, end: Option<NaiveDate>) -> EngineErrorResult<()> {
    if let (Some(start), Some(end)) = (start, end)
        && end < start
    {
        return Err(EngineError::validation(
            format!("end date {} is before start date {}", end, start),
            "end_date",
        ));
    }

    Ok(())
}

pub async fn create_epic(ctx: &HandlerContext, input: CreateEpicInput) -> EngineErrorResult<Epic> {
    debug!("{} CreateEpic starting", ctx.log_prefix());

    let project_id = ctx.project()?;
    let validator = Validator::new(&ctx.validation);
    let title = validator.title(&input.title, "title")?;
    validator.description(input.description.as_deref(), "description")?;
    check_date_range(input.start_date, input.end_date)?;

    let mut epic = Epic::new(project_id, title, ctx.user_id);
    epic.description = input.description;
    epic.color = input.color;
    epic.start_date = input.start_date;
    epic.end_date = input.end_date;

    let epic_ref = &epic;
    db_write(ctx, "CreateEpic", move || async move {
        let mut tx = ctx.pool.begin().await?;
        EpicRepository::create(&mut *tx, epic_ref)
            .await
            .map_err(|e| {
                if e.is_foreign_key_violation() {
                    EngineError::not_found(format!("project {} not found", project_id))
                } else {
                    EngineError::from(e)
                }
            })?;
        tx.commit().await?;
        Ok::<_, EngineError>(())
    })
    .await?;

    info!("{} Created epic '{}'", ctx.log_prefix(), epic.title);

    Ok(epic)
}

/// Status is operator-set and never derived from member tasks.
pub async fn update_epic(
    ctx: &HandlerContext,
    epic_id: Uuid,
    input: UpdateEpicInput,
) -> EngineErrorResult<Epic> {
    debug!("{} UpdateEpic starting", ctx.log_prefix());

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

    let (title, input) = (&title, &input);
    let epic = db_write(ctx, "UpdateEpic", move || async move {
        let mut tx = ctx.pool.begin().await?;
        if !ProjectRepository::bump_revision(&mut *tx, project_id).await? {
            return Err(EngineError::not_found(format!(
                "project {} not found",
                project_id
            )));
        }
        let mut epic = load_epic(&mut tx, project_id, epic_id).await?;

        if let Some(title) = title {
            epic.title = title.clone();
        }
        if let Some(description) = &input.description {
            epic.description = description.clone();
        }
        if let Some(color) = &input.color {
            epic.color = color.clone();
        }
        if let Some(status) = input.status {
            epic.status = status;
        }
        if let Some(start_date) = input.start_date {
            epic.start_date = start_date;
        }
        if let Some(end_date) = input.end_date {
            epic.end_date = end_date;
        }
        check_date_range(epic.start_date, epic.end_date)?;
        epic.updated_at = Utc::now();

        EpicRepository::update(&mut *tx, &epic).await?;
        tx.commit().await?;
        Ok::<_, EngineError>(epic)
    })
    .await?;

    info!(
        "{} Updated epic '{}' ({})",
        ctx.log_prefix(),
        epic.title,
        epic.status.as_str()
    );

    Ok(epic)
}

/// Deletes the epic. Member tasks stay and lose their `epic_id`.
pub async fn delete_epic(ctx: &HandlerContext, epic_id: Uuid) -> EngineErrorResult<()> {
    debug!("{} DeleteEpic starting", ctx.log_prefix());

    let project_id = ctx.project()?;

    db_write(ctx, "DeleteEpic", move || async move {
        let mut tx = ctx.pool.begin().await?;
        if !ProjectRepository::bump_revision(&mut *tx, project_id).await? {
            return Err(EngineError::not_found(format!(
                "project {} not found",
                project_id
            )));
        }
        let epic = load_epic(&mut tx, project_id, epic_id).await?;
        EpicRepository::delete(&mut *tx, epic.id).await?;
        tx.commit().await?;
        Ok::<_, EngineError>(())
    })
    .await?;

    info!("{} Deleted epic {}", ctx.log_prefix(), epic_id);

    Ok(())
}

pub async fn get_epic(ctx: &HandlerContext, epic_id: Uuid) -> EngineErrorResult<Epic> {
    let project_id = ctx.project()?;

    db_read(ctx, "GetEpic", move || async move {
        let mut conn = ctx.pool.acquire().await?;
        load_epic(&mut conn, project_id, epic_id).await
    })
    .await
}

pub async fn list_epics(ctx: &HandlerContext) -> EngineErrorResult<Vec<Epic>> {
    let project_id = ctx.project()?;

    db_read(ctx, "ListEpics", move || async move {
        let mut conn = ctx.pool.acquire().await?;
        load_project(&mut conn, project_id).await?;
        Ok::<_, EngineError>(EpicRepository::list_by_project(&mut *conn, project_id).await?)
    })
    .await
}
