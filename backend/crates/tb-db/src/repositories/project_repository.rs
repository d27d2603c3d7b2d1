use crate::decode::{self, millis};
use crate::error::Result as DbErrorResult;

use tb_core::Project;

use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct ProjectRepository;

const SELECT_PROJECT: &str = r#"
    SELECT id, key, name, description, created_at, updated_at, created_by
    FROM tb_projects
"#;

impl ProjectRepository {
    pub async fn create<'e, E>(executor: E, project: &Project) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tb_projects (
                    id, key, name, description, created_at, updated_at, created_by
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(project.id.to_string())
        .bind(&project.key)
        .bind(&project.name)
        .bind(&project.description)
        .bind(millis(project.created_at))
        .bind(millis(project.updated_at))
        .bind(project.created_by.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_PROJECT} WHERE id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(from_row).transpose()
    }

    pub async fn find_by_key<'e, E>(executor: E, key: &str) -> DbErrorResult<Option<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_PROJECT} WHERE key = ?");
        let row = sqlx::query(&sql)
            .bind(key)
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(from_row).transpose()
    }

    pub async fn list<'e, E>(executor: E) -> DbErrorResult<Vec<Project>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_PROJECT} ORDER BY key ASC");
        let rows = sqlx::query(&sql).fetch_all(executor).await?;

        rows.iter().map(from_row).collect()
    }

    /// Hands out the next task number and advances the counter in one statement.
    /// Returns `None` when the project does not exist.
    pub async fn allocate_task_number<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Option<i64>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let number: Option<i64> = sqlx::query_scalar(
            r#"
                UPDATE tb_projects
                SET next_task_number = next_task_number + 1
                WHERE id = ?
                RETURNING next_task_number - 1
            "#,
        )
        .bind(project_id.to_string())
        .fetch_optional(executor)
        .await?;

        Ok(number)
    }

    /// Takes the project-wide write guard for the current transaction.
    /// Returns `false` when the project does not exist.
    pub async fn bump_revision<'e, E>(executor: E, project_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("UPDATE tb_projects SET revision = revision + 1 WHERE id = ?")
            .bind(project_id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() == 1)
    }
}

fn from_row(row: &SqliteRow) -> DbErrorResult<Project> {
    Ok(Project {
        id: decode::uuid(row, "id")?,
        key: row.try_get("key")?,
        name: row.try_get("name")?,
        description: row.try_get("description")?,
        created_at: decode::timestamp(row, "created_at")?,
        updated_at: decode::timestamp(row, "updated_at")?,
        created_by: decode::uuid(row, "created_by")?,
    })
}
