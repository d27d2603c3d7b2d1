use crate::handlers::lookup::load_project;
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_read};

use tb_core::{Board, BoardFilter, project_board};
use tb_db::{StatusRepository, TaskFilter, TaskRepository};

/// Columns in status order with their tasks in position order.
///
/// Statuses and tasks are read in one transaction, so the board is a single
/// committed snapshot.
pub async fn get_board(ctx: &HandlerContext, filter: BoardFilter) -> EngineErrorResult<Board> {
    let project_id = ctx.project()?;
    let filter = &filter;

    db_read(ctx, "GetBoard", move || async move {
        let mut tx = ctx.pool.begin().await?;
        load_project(&mut tx, project_id).await?;

        let statuses = StatusRepository::list_by_project(&mut *tx, project_id).await?;
        let tasks =
            TaskRepository::list_by_project(&mut *tx, project_id, &TaskFilter::from(filter))
                .await?;

        Ok::<_, EngineError>(project_board(project_id, statuses, tasks, filter))
    })
    .await
}
