use crate::handlers::lookup::{load_project, load_status};
use crate::validation::Validator;
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_read, db_write};

use tb_core::Status;
use tb_db::{ProjectRepository, StatusRepository};

use log::{debug, info};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct CreateStatusInput {
    pub name: String,
    pub color: Option<String>,
    pub is_done: bool,
}

/// Appends a column after the current last one.
pub async fn create_status(
    ctx: &HandlerContext,
    input: CreateStatusInput,
) -> EngineErrorResult<Status> {
    debug!("{} CreateStatus starting", ctx.log_prefix());

    let project_id = ctx.project()?;
    let name = Validator::new(&ctx.validation).title(&input.name, "name")?;
    let (name, input) = (&name, &input);

    let status = db_write(ctx, "CreateStatus", move || {
        insert_status(ctx, project_id, name, input)
    })
    .await?;

    info!(
        "{} Created status '{}' at order {}",
        ctx.log_prefix(),
        status.name,
        status.sort_order
    );

    Ok(status)
}

async fn insert_status(
    ctx: &HandlerContext,
    project_id: Uuid,
    name: &str,
    input: &CreateStatusInput,
) -> EngineErrorResult<Status> {
    let mut tx = ctx.pool.begin().await?;

    // Serialises sort_order allocation within the project.
    if !ProjectRepository::bump_revision(&mut *tx, project_id).await? {
        return Err(EngineError::not_found(format!(
            "project {} not found",
            project_id
        )));
    }

    let order = StatusRepository::max_sort_order(&mut *tx, project_id)
        .await?
        .map_or(0, |max| max + 1);
    let status = Status::new(
        project_id,
        name.to_string(),
        input.color.clone(),
        order,
        input.is_done,
    );
    StatusRepository::create(&mut *tx, &status).await?;

    tx.commit().await?;
    Ok(status)
}

pub async fn list_statuses(ctx: &HandlerContext) -> EngineErrorResult<Vec<Status>> {
    let project_id = ctx.project()?;

    db_read(ctx, "ListStatuses", move || async move {
        let mut conn = ctx.pool.acquire().await?;
        load_project(&mut conn, project_id).await?;
        Ok::<_, EngineError>(StatusRepository::list_by_project(&mut *conn, project_id).await?)
    })
    .await
}

/// Removes an empty column. The project always keeps at least one non-done
/// column for new tasks to start in.
pub async fn delete_status(ctx: &HandlerContext, status_id: Uuid) -> EngineErrorResult<()> {
    debug!("{} DeleteStatus starting", ctx.log_prefix());

    let project_id = ctx.project()?;

    db_write(ctx, "DeleteStatus", move || async move {
        let mut tx = ctx.pool.begin().await?;

        if !ProjectRepository::bump_revision(&mut *tx, project_id).await? {
            return Err(EngineError::not_found(format!(
                "project {} not found",
                project_id
            )));
        }

        let status = load_status(&mut tx, project_id, status_id).await?;
        StatusRepository::lock_column(&mut *tx, status.id).await?;

        let task_count = StatusRepository::count_tasks(&mut *tx, status.id).await?;
        if task_count > 0 {
            return Err(EngineError::conflict(format!(
                "status '{}' still holds {} tasks",
                status.name, task_count
            )));
        }

        if !status.is_done {
            let open_columns = StatusRepository::list_by_project(&mut *tx, project_id)
                .await?
                .iter()
                .filter(|s| !s.is_done)
                .count();
            if open_columns <= 1 {
                return Err(EngineError::invalid_state(format!(
                    "status '{}' is the last non-done status",
                    status.name
                )));
            }
        }

        StatusRepository::delete(&mut *tx, status.id).await?;
        tx.commit().await?;
        Ok(())
    })
    .await?;

    info!("{} Deleted status {}", ctx.log_prefix(), status_id);

    Ok(())
}
