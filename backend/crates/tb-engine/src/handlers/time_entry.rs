use crate::handlers::lookup::load_task;
use crate::validation::Validator;
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_read, db_write};

use tb_core::TimeEntry;
use tb_db::{TaskRepository, TimeEntryRepository};

use chrono::{NaiveDate, Utc};
use log::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct LogTimeInput {
    pub hours: f64,
    pub spent_on: NaiveDate,
    pub note: Option<String>,
}

/// Appends a time entry. `Task::logged_hours` is always their sum.
pub async fn log_time(
    ctx: &HandlerContext,
    task_id: Uuid,
    input: LogTimeInput,
) -> EngineErrorResult<TimeEntry> {
    debug!("{} LogTime starting", ctx.log_prefix());

    let project_id = ctx.project()?;
    let validator = Validator::new(&ctx.validation);
    validator.logged_hours(input.hours)?;
    validator.description(input.note.as_deref(), "note")?;

    let entry = TimeEntry::new(task_id, ctx.user_id, input.hours, input.spent_on, input.note);

    let entry_ref = &entry;
    db_write(ctx, "LogTime", move || async move {
        let mut tx = ctx.pool.begin().await?;
        if !TaskRepository::claim(&mut *tx, project_id, task_id, Utc::now()).await? {
            return Err(EngineError::not_found(format!("task {} not found", task_id)));
        }
        TimeEntryRepository::create(&mut *tx, entry_ref).await?;
        tx.commit().await?;
        Ok(())
    })
    .await?;

    info!(
        "{} Logged {}h on task {}",
        ctx.log_prefix(),
        entry.hours,
        task_id
    );

    Ok(entry)
}

pub async fn list_time_entries(
    ctx: &HandlerContext,
    task_id: Uuid,
) -> EngineErrorResult<Vec<TimeEntry>> {
    let project_id = ctx.project()?;

    db_read(ctx, "ListTimeEntries", move || async move {
        let mut tx = ctx.pool.begin().await?;
        load_task(&mut tx, project_id, task_id).await?;
        Ok::<_, EngineError>(TimeEntryRepository::list_by_task(&mut *tx, task_id).await?)
    })
    .await
}
