use crate::handlers::lookup::load_task;
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_read, db_write};

use tb_core::{Dependency, would_create_cycle};
use tb_db::{DependencyRepository, ProjectRepository};

use log::{debug, info};
use serde::Serialize;
use uuid::Uuid;

/// Direct neighbours of one task in the dependency graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskDependencies {
    pub task_id: Uuid,
    /// Edges whose `from_task_id` blocks this task
    pub blockers: Vec<Dependency>,
    /// Edges from this task to the tasks it blocks
    pub dependents: Vec<Dependency>,
}

/// Records that `from_task_id` blocks `to_task_id`.
///
/// The cycle check reads the project's edges after taking the project guard,
/// inside the transaction that inserts the new edge.
pub async fn add_dependency(
    ctx: &HandlerContext,
    from_task_id: Uuid,
    to_task_id: Uuid,
) -> EngineErrorResult<Dependency> {
    debug!("{} AddDependency starting", ctx.log_prefix());

    let project_id = ctx.project()?;
    if from_task_id == to_task_id {
        return Err(EngineError::validation(
            "a task cannot block itself",
            "to_task_id",
        ));
    }

    let dependency = db_write(ctx, "AddDependency", move || {
        insert_dependency(ctx, project_id, from_task_id, to_task_id)
    })
    .await?;

    info!(
        "{} Added dependency {} -> {}",
        ctx.log_prefix(),
        from_task_id,
        to_task_id
    );

    Ok(dependency)
}

async fn insert_dependency(
    ctx: &HandlerContext,
    project_id: Uuid,
    from_task_id: Uuid,
    to_task_id: Uuid,
) -> EngineErrorResult<Dependency> {
    let mut tx = ctx.pool.begin().await?;

    if !ProjectRepository::bump_revision(&mut *tx, project_id).await? {
        return Err(EngineError::not_found(format!(
            "project {} not found",
            project_id
        )));
    }

    load_task(&mut tx, project_id, from_task_id).await?;
    load_task(&mut tx, project_id, to_task_id).await?;

    if DependencyRepository::find(&mut *tx, from_task_id, to_task_id)
        .await?
        .is_some()
    {
        return Err(EngineError::conflict(format!(
            "dependency {} -> {} already exists",
            from_task_id, to_task_id
        )));
    }

    let edges: Vec<(Uuid, Uuid)> = DependencyRepository::list_by_project(&mut *tx, project_id)
        .await?
        .iter()
        .map(|d| (d.from_task_id, d.to_task_id))
        .collect();
    if let Some(path) = would_create_cycle(&edges, from_task_id, to_task_id) {
        return Err(EngineError::cycle(path));
    }

    let dependency = Dependency::new(project_id, from_task_id, to_task_id, ctx.user_id);
    DependencyRepository::create(&mut *tx, &dependency).await?;

    tx.commit().await?;
    Ok(dependency)
}

/// Removes the edge if present. Returns whether an edge was removed.
pub async fn remove_dependency(
    ctx: &HandlerContext,
    from_task_id: Uuid,
    to_task_id: Uuid,
) -> EngineErrorResult<bool> {
    debug!("{} RemoveDependency starting", ctx.log_prefix());

    let project_id = ctx.project()?;

    let removed = db_write(ctx, "RemoveDependency", move || async move {
        let mut tx = ctx.pool.begin().await?;

        if !ProjectRepository::bump_revision(&mut *tx, project_id).await? {
            return Err(EngineError::not_found(format!(
                "project {} not found",
                project_id
            )));
        }

        let in_project = DependencyRepository::find(&mut *tx, from_task_id, to_task_id)
            .await?
            .is_some_and(|d| d.project_id == project_id);
        let removed = in_project
            && DependencyRepository::delete(&mut *tx, from_task_id, to_task_id).await?;

        tx.commit().await?;
        Ok(removed)
    })
    .await?;

    info!(
        "{} Removed dependency {} -> {} (existed: {})",
        ctx.log_prefix(),
        from_task_id,
        to_task_id,
        removed
    );

    Ok(removed)
}

pub async fn list_dependencies(
    ctx: &HandlerContext,
    task_id: Uuid,
) -> EngineErrorResult<TaskDependencies> {
    let project_id = ctx.project()?;

    db_read(ctx, "ListDependencies", move || async move {
        let mut tx = ctx.pool.begin().await?;
        load_task(&mut tx, project_id, task_id).await?;

        let blockers = DependencyRepository::find_blockers(&mut *tx, task_id).await?;
        let dependents = DependencyRepository::find_dependents(&mut *tx, task_id).await?;

        Ok::<_, EngineError>(TaskDependencies {
            task_id,
            blockers,
            dependents,
        })
    })
    .await
}
