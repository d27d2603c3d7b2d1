use crate::decode::{self, millis};
use crate::error::Result as DbErrorResult;

use tb_core::Dependency;

use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct DependencyRepository;

const SELECT_DEPENDENCY: &str = r#"
    SELECT id, project_id, from_task_id, to_task_id, created_at, created_by
    FROM tb_dependencies
"#;

impl DependencyRepository {
    pub async fn create<'e, E>(executor: E, dependency: &Dependency) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tb_dependencies (
                    id, project_id, from_task_id, to_task_id, created_at, created_by
                ) VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(dependency.id.to_string())
        .bind(dependency.project_id.to_string())
        .bind(dependency.from_task_id.to_string())
        .bind(dependency.to_task_id.to_string())
        .bind(millis(dependency.created_at))
        .bind(dependency.created_by.to_string())
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find<'e, E>(
        executor: E,
        from_task_id: Uuid,
        to_task_id: Uuid,
    ) -> DbErrorResult<Option<Dependency>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_DEPENDENCY} WHERE from_task_id = ? AND to_task_id = ?");
        let row = sqlx::query(&sql)
            .bind(from_task_id.to_string())
            .bind(to_task_id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(from_row).transpose()
    }

    /// Every edge of the project, for cycle checks.
    pub async fn list_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<Dependency>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_DEPENDENCY} WHERE project_id = ? ORDER BY created_at ASC");
        let rows = sqlx::query(&sql)
            .bind(project_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(from_row).collect()
    }

    /// Edges whose `to_task_id` is the task: the tasks blocking it.
    pub async fn find_blockers<'e, E>(executor: E, task_id: Uuid) -> DbErrorResult<Vec<Dependency>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_DEPENDENCY} WHERE to_task_id = ? ORDER BY created_at ASC");
        let rows = sqlx::query(&sql)
            .bind(task_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(from_row).collect()
    }

    /// Edges whose `from_task_id` is the task: the tasks it blocks.
    pub async fn find_dependents<'e, E>(
        executor: E,
        task_id: Uuid,
    ) -> DbErrorResult<Vec<Dependency>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_DEPENDENCY} WHERE from_task_id = ? ORDER BY created_at ASC");
        let rows = sqlx::query(&sql)
            .bind(task_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(from_row).collect()
    }

    pub async fn delete<'e, E>(executor: E, from_task_id: Uuid, to_task_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result =
            sqlx::query("DELETE FROM tb_dependencies WHERE from_task_id = ? AND to_task_id = ?")
                .bind(from_task_id.to_string())
                .bind(to_task_id.to_string())
                .execute(executor)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn from_row(row: &SqliteRow) -> DbErrorResult<Dependency> {
    Ok(Dependency {
        id: decode::uuid(row, "id")?,
        project_id: decode::uuid(row, "project_id")?,
        from_task_id: decode::uuid(row, "from_task_id")?,
        to_task_id: decode::uuid(row, "to_task_id")?,
        created_at: decode::timestamp(row, "created_at")?,
        created_by: decode::uuid(row, "created_by")?,
    })
}
