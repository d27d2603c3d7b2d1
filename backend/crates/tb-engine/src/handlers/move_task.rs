use crate::handlers::lookup::{load_status, load_task};
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_write};

use tb_core::models::task::completion_after;
use tb_core::{Task, plan_move};
use tb_db::{StatusRepository, TaskRepository};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use log::{debug, info};
use sqlx::SqliteConnection;
use uuid::Uuid;

/// Destination of a move: a column (the task's own when `None`) and a
/// zero-based index in it. Out-of-range indices clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveTarget {
    pub status_id: Option<Uuid>,
    pub position: i64,
}

/// Moves a task within its column or into another one, renumbering every
/// affected column to a dense `0..n` sequence in one transaction.
pub async fn move_task(
    ctx: &HandlerContext,
    task_id: Uuid,
    target: MoveTarget,
) -> EngineErrorResult<Task> {
    debug!("{} MoveTask starting", ctx.log_prefix());

    let project_id = ctx.project()?;

    let task = db_write(ctx, "MoveTask", move || {
        move_task_once(ctx, project_id, task_id, target)
    })
    .await?;

    info!(
        "{} Moved task {} to status {} position {}",
        ctx.log_prefix(),
        task.code,
        task.status_id,
        task.position
    );

    Ok(task)
}

async fn move_task_once(
    ctx: &HandlerContext,
    project_id: Uuid,
    task_id: Uuid,
    target: MoveTarget,
) -> EngineErrorResult<Task> {
    let now = Utc::now();
    let mut tx = ctx.pool.begin().await?;

    if !TaskRepository::claim(&mut *tx, project_id, task_id, now).await? {
        return Err(EngineError::not_found(format!("task {} not found", task_id)));
    }

    let task = load_task(&mut tx, project_id, task_id).await?;
    let destination = target.status_id.unwrap_or(task.status_id);
    relocate(&mut tx, &task, destination, target.position, now).await?;

    let moved = load_task(&mut tx, project_id, task_id).await?;
    tx.commit().await?;
    Ok(moved)
}

/// Places `task` at `position` of the `destination` column inside the caller's
/// transaction.
///
/// Column guards are taken in ascending status id order. A destination that
/// no longer exists is `NotFound`. Crossing into or out of a done column
/// stamps or clears `completed_at`.
pub(crate) async fn relocate(
    conn: &mut SqliteConnection,
    task: &Task,
    destination: Uuid,
    position: i64,
    now: DateTime<Utc>,
) -> EngineErrorResult<()> {
    let source_status = load_status(conn, task.project_id, task.status_id).await?;
    let destination_status = if destination == task.status_id {
        source_status.clone()
    } else {
        load_status(conn, task.project_id, destination).await?
    };

    let mut guarded = vec![source_status.id, destination_status.id];
    guarded.sort();
    guarded.dedup();
    for status_id in guarded {
        if !StatusRepository::lock_column(&mut *conn, status_id).await? {
            return Err(EngineError::not_found(format!(
                "status {} disappeared during the move",
                status_id
            )));
        }
    }

    let source_column = TaskRepository::column(&mut *conn, source_status.id).await?;
    let destination_column = if destination_status.id == source_status.id {
        None
    } else {
        Some(TaskRepository::column(&mut *conn, destination_status.id).await?)
    };

    let current: HashMap<Uuid, i64> = source_column
        .iter()
        .chain(destination_column.iter().flatten())
        .copied()
        .collect();
    let source_ids: Vec<Uuid> = source_column.iter().map(|(id, _)| *id).collect();
    let destination_ids: Option<Vec<Uuid>> = destination_column
        .as_ref()
        .map(|column| column.iter().map(|(id, _)| *id).collect());

    let plan = plan_move(&source_ids, destination_ids.as_deref(), task.id, position)?;

    let completed_at = if plan.cross_column {
        completion_after(
            task.completed_at,
            source_status.is_done,
            destination_status.is_done,
            now,
        )
    } else {
        task.completed_at
    };
    TaskRepository::set_placement(
        &mut *conn,
        task.id,
        destination_status.id,
        plan.position,
        completed_at,
        now,
    )
    .await?;

    for (sibling, position) in plan.assignments() {
        if *sibling == task.id || current.get(sibling) == Some(position) {
            continue;
        }
        TaskRepository::set_position(&mut *conn, *sibling, *position).await?;
    }

    Ok(())
}

/// Closes any gap left in a column after a task leaves it. The caller holds
/// the column guard.
pub(crate) async fn compact_column(
    conn: &mut SqliteConnection,
    status_id: Uuid,
) -> EngineErrorResult<()> {
    let column = TaskRepository::column(&mut *conn, status_id).await?;

    for (index, (task_id, position)) in column.into_iter().enumerate() {
        let dense = index as i64;
        if position != dense {
            TaskRepository::set_position(&mut *conn, task_id, dense).await?;
        }
    }

    Ok(())
}
