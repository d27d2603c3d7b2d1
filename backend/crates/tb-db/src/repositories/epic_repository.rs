use crate::decode::{self, date_text, millis};
use crate::error::Result as DbErrorResult;

use tb_core::Epic;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct EpicRepository;

const SELECT_EPIC: &str = r#"
    SELECT id, project_id, title, description, color, status, start_date, end_date,
           created_at, updated_at, created_by
    FROM tb_epics
"#;

impl EpicRepository {
    pub async fn create<'e, E>(executor: E, epic: &Epic) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tb_epics (
                    id, project_id, title, description, color, status, start_date, end_date,
                    created_at, updated_at, created_by
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(epic.id.to_string())
        .bind(epic.project_id.to_string())
        .bind(&epic.title)
        .bind(&epic.description)
        .bind(&epic.color)
        .bind(epic.status.as_str())
        .bind(epic.start_date.map(date_text))
        .bind(epic.end_date.map(date_text))
        .bind(millis(epic.created_at))
        .bind(millis(epic.updated_at))
        .bind(epic.created_by.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Epic>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_EPIC} WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(from_row).transpose()
    }

    pub async fn list_by_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Vec<Epic>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_EPIC} WHERE project_id = ? ORDER BY created_at ASC");
        let rows = sqlx::query(&sql)
            .bind(project_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(from_row).collect()
    }

    pub async fn update<'e, E>(executor: E, epic: &Epic) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE tb_epics
                SET title = ?, description = ?, color = ?, status = ?,
                    start_date = ?, end_date = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&epic.title)
        .bind(&epic.description)
        .bind(&epic.color)
        .bind(epic.status.as_str())
        .bind(epic.start_date.map(date_text))
        .bind(epic.end_date.map(date_text))
        .bind(millis(epic.updated_at))
        .bind(epic.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the epic. Member tasks keep existing with `epic_id` cleared.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tb_epics WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn from_row(row: &SqliteRow) -> DbErrorResult<Epic> {
    Ok(Epic {
        id: decode::uuid(row, "id")?,
        project_id: decode::uuid(row, "project_id")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        color: row.try_get("color")?,
        status: decode::parsed(row, "status")?,
        start_date: decode::opt_date(row, "start_date")?,
        end_date: decode::opt_date(row, "end_date")?,
        created_at: decode::timestamp(row, "created_at")?,
        updated_at: decode::timestamp(row, "updated_at")?,
        created_by: decode::uuid(row, "created_by")?,
    })
}
