use crate::handlers::lookup::{load_project, load_sprint};
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_read};

use tb_core::{BurndownMode, SprintChart, VelocityReport, sprint_chart, velocity};
use tb_db::{SprintRepository, TaskFilter, TaskRepository};

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

pub const DEFAULT_VELOCITY_WINDOW: usize = 5;
pub const MAX_VELOCITY_WINDOW: usize = 50;

/// Burndown or burnup series of a sprint, with actuals up to today (UTC).
pub async fn get_burndown(
    ctx: &HandlerContext,
    sprint_id: Uuid,
    mode: BurndownMode,
) -> EngineErrorResult<SprintChart> {
    get_burndown_as_of(ctx, sprint_id, mode, Utc::now().date_naive()).await
}

pub async fn get_burndown_as_of(
    ctx: &HandlerContext,
    sprint_id: Uuid,
    mode: BurndownMode,
    today: NaiveDate,
) -> EngineErrorResult<SprintChart> {
    let project_id = ctx.project()?;

    db_read(ctx, "GetBurndown", move || async move {
        let mut tx = ctx.pool.begin().await?;
        let sprint = load_sprint(&mut tx, project_id, sprint_id).await?;
        let tasks = TaskRepository::list_by_sprint(&mut *tx, sprint.id).await?;

        Ok::<_, EngineError>(sprint_chart(&sprint, &tasks, mode, today))
    })
    .await
}

/// Committed and completed points of the `last_n` most recently completed
/// sprints.
pub async fn get_velocity(ctx: &HandlerContext, last_n: usize) -> EngineErrorResult<VelocityReport> {
    let project_id = ctx.project()?;
    if last_n == 0 || last_n > MAX_VELOCITY_WINDOW {
        return Err(EngineError::validation(
            format!("last_n must be 1-{}", MAX_VELOCITY_WINDOW),
            "last_n",
        ));
    }

    db_read(ctx, "GetVelocity", move || async move {
        let mut tx = ctx.pool.begin().await?;
        load_project(&mut tx, project_id).await?;

        let sprints = SprintRepository::list_by_project(&mut *tx, project_id).await?;
        let tasks =
            TaskRepository::list_by_project(&mut *tx, project_id, &TaskFilter::default()).await?;

        Ok::<_, EngineError>(velocity(&sprints, &tasks, last_n))
    })
    .await
}
