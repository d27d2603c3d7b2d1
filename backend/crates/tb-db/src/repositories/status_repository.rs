use crate::decode::{self, millis};
use crate::error::Result as DbErrorResult;

use tb_core::Status;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct StatusRepository;

const SELECT_STATUS: &str = r#"
    SELECT id, project_id, name, color, sort_order, is_done, created_at
    FROM tb_statuses
"#;

impl StatusRepository {
    pub async fn create<'e, E>(executor: E, status: &Status) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tb_statuses (
                    id, project_id, name, color, sort_order, is_done, created_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(status.id.to_string())
        .bind(status.project_id.to_string())
        .bind(&status.name)
        .bind(&status.color)
        .bind(status.sort_order)
        .bind(status.is_done)
        .bind(millis(status.created_at))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Status>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_STATUS} WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(from_row).transpose()
    }

    /// Columns of a project in board order.
    pub async fn list_by_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Vec<Status>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_STATUS} WHERE project_id = ? ORDER BY sort_order ASC");
        let rows = sqlx::query(&sql)
            .bind(project_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(from_row).collect()
    }

    /// Highest `sort_order` in the project, or `None` when it has no columns.
    pub async fn max_sort_order<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Option<i64>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let max: Option<i64> =
            sqlx::query_scalar("SELECT MAX(sort_order) FROM tb_statuses WHERE project_id = ?")
                .bind(project_id.to_string())
                .fetch_one(executor)
                .await?;

        Ok(max)
    }

    /// Takes the column's write guard for the current transaction. Returns
    /// `false` when the status no longer exists.
    pub async fn lock_column<'e, E>(executor: E, status_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE tb_statuses SET revision = revision + 1 WHERE id = ?")
            .bind(status_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    pub async fn count_tasks<'e, E>(executor: E, status_id: Uuid) -> DbErrorResult<i64>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM tb_tasks WHERE status_id = ?")
            .bind(status_id.to_string())
            .fetch_one(executor)
            .await?;

        Ok(count)
    }

    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tb_statuses WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn from_row(row: &SqliteRow) -> DbErrorResult<Status> {
    Ok(Status {
        id: decode::uuid(row, "id")?,
        project_id: decode::uuid(row, "project_id")?,
        name: row.try_get("name")?,
        color: row.try_get("color")?,
        sort_order: row.try_get("sort_order")?,
        is_done: row.try_get("is_done")?,
        created_at: decode::timestamp(row, "created_at")?,
    })
}
