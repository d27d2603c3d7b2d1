use crate::decode::{self, millis};
use crate::error::Result as DbErrorResult;

use tb_core::Comment;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct CommentRepository;

impl CommentRepository {
    pub async fn create<'e, E>(executor: E, comment: &Comment) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tb_comments (id, task_id, author_id, body, created_at)
                VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(comment.id.to_string())
        .bind(comment.task_id.to_string())
        .bind(comment.author_id.to_string())
        .bind(&comment.body)
        .bind(millis(comment.created_at))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn list_by_task<'e, E>(executor: E, task_id: Uuid) -> DbErrorResult<Vec<Comment>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, task_id, author_id, body, created_at
                FROM tb_comments
                WHERE task_id = ?
                ORDER BY created_at ASC
            "#,
        )
        .bind(task_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter()
            .map(|row| -> DbErrorResult<Comment> {
                Ok(Comment {
                    id: decode::uuid(row, "id")?,
                    task_id: decode::uuid(row, "task_id")?,
                    author_id: decode::uuid(row, "author_id")?,
                    body: row.try_get("body")?,
                    created_at: decode::timestamp(row, "created_at")?,
                })
            })
            .collect()
    }
}
