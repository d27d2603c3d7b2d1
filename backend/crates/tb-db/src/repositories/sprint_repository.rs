use crate::decode::{self, date_text, millis};
use crate::error::Result as DbErrorResult;

use tb_core::Sprint;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct SprintRepository;

const SELECT_SPRINT: &str = r#"
    SELECT id, project_id, name, goal, start_date, end_date, status,
           started_at, completed_at, created_at, updated_at, created_by
    FROM tb_sprints
"#;

impl SprintRepository {
    pub async fn create<'e, E>(executor: E, sprint: &Sprint) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tb_sprints (
                    id, project_id, name, goal, start_date, end_date, status,
                    started_at, completed_at, created_at, updated_at, created_by
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(sprint.id.to_string())
        .bind(sprint.project_id.to_string())
        .bind(&sprint.name)
        .bind(&sprint.goal)
        .bind(date_text(sprint.start_date))
        .bind(date_text(sprint.end_date))
        .bind(sprint.status.as_str())
        .bind(sprint.started_at.map(millis))
        .bind(sprint.completed_at.map(millis))
        .bind(millis(sprint.created_at))
        .bind(millis(sprint.updated_at))
        .bind(sprint.created_by.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Sprint>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_SPRINT} WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(from_row).transpose()
    }

    pub async fn list_by_project<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Vec<Sprint>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_SPRINT} WHERE project_id = ? ORDER BY start_date ASC, created_at ASC");
        let rows = sqlx::query(&sql)
            .bind(project_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(from_row).collect()
    }

    pub async fn find_active<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<Option<Sprint>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_SPRINT} WHERE project_id = ? AND status = 'active'");
        let row = sqlx::query(&sql)
            .bind(project_id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(from_row).transpose()
    }

    pub async fn update<'e, E>(executor: E, sprint: &Sprint) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE tb_sprints
                SET name = ?, goal = ?, start_date = ?, end_date = ?, status = ?,
                    started_at = ?, completed_at = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&sprint.name)
        .bind(&sprint.goal)
        .bind(date_text(sprint.start_date))
        .bind(date_text(sprint.end_date))
        .bind(sprint.status.as_str())
        .bind(sprint.started_at.map(millis))
        .bind(sprint.completed_at.map(millis))
        .bind(millis(sprint.updated_at))
        .bind(sprint.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Deletes the sprint. Member tasks keep existing with `sprint_id` cleared.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tb_sprints WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn from_row(row: &SqliteRow) -> DbErrorResult<Sprint> {
    Ok(Sprint {
        id: decode::uuid(row, "id")?,
        project_id: decode::uuid(row, "project_id")?,
        name: row.try_get("name")?,
        goal: row.try_get("goal")?,
        start_date: decode::date(row, "start_date")?,
        end_date: decode::date(row, "end_date")?,
        status: decode::parsed(row, "status")?,
        started_at: decode::opt_timestamp(row, "started_at")?,
        completed_at: decode::opt_timestamp(row, "completed_at")?,
        created_at: decode::timestamp(row, "created_at")?,
        updated_at: decode::timestamp(row, "updated_at")?,
        created_by: decode::uuid(row, "created_by")?,
    })
}
