use crate::handlers::lookup::load_task;
use crate::validation::Validator;
use crate::{EngineError, HandlerContext, Result as EngineErrorResult, db_read, db_write};

use tb_core::Comment;
use tb_db::CommentRepository;

use log::{debug, info};
use uuid::Uuid;

pub async fn add_comment(
    ctx: &HandlerContext,
    task_id: Uuid,
    body: &str,
) -> EngineErrorResult<Comment> {
    debug!("{} AddComment starting", ctx.log_prefix());

    let project_id = ctx.project()?;
    let body = body.trim();
    if body.is_empty() {
        return Err(EngineError::validation("comment body cannot be empty", "body"));
    }
    Validator::new(&ctx.validation).description(Some(body), "body")?;

    let comment = Comment::new(task_id, ctx.user_id, body.to_string());

    let comment_ref = &comment;
    db_write(ctx, "AddComment", move || async move {
        let mut tx = ctx.pool.begin().await?;
        load_task(&mut tx, project_id, task_id).await?;
        CommentRepository::create(&mut *tx, comment_ref).await?;
        tx.commit().await?;
        Ok::<_, EngineError>(())
    })
    .await?;

    info!("{} Commented on task {}", ctx.log_prefix(), task_id);

    Ok(comment)
}

pub async fn list_comments(ctx: &HandlerContext, task_id: Uuid) -> EngineErrorResult<Vec<Comment>> {
    let project_id = ctx.project()?;

    db_read(ctx, "ListComments", move || async move {
        let mut tx = ctx.pool.begin().await?;
        load_task(&mut tx, project_id, task_id).await?;
        Ok::<_, EngineError>(CommentRepository::list_by_task(&mut *tx, task_id).await?)
    })
    .await
}
