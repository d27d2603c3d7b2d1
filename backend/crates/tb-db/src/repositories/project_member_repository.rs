use crate::decode::{self, millis};
use crate::error::Result as DbErrorResult;

use tb_core::ProjectMember;

use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

pub struct ProjectMemberRepository;

impl ProjectMemberRepository {
    /// Adds the member, or updates the role of an existing one.
    pub async fn upsert<'e, E>(executor: E, member: &ProjectMember) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tb_project_members (project_id, user_id, role, joined_at)
                VALUES (?, ?, ?, ?)
                ON CONFLICT (project_id, user_id) DO UPDATE SET role = excluded.role
            "#,
        )
        .bind(member.project_id.to_string())
        .bind(member.user_id.to_string())
        .bind(member.role.as_str())
        .bind(millis(member.joined_at))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find<'e, E>(
        executor: E,
        project_id: Uuid,
        user_id: Uuid,
    ) -> DbErrorResult<Option<ProjectMember>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let row = sqlx::query(
            r#"
                SELECT project_id, user_id, role, joined_at
                FROM tb_project_members
                WHERE project_id = ? AND user_id = ?
            "#,
        )
        .bind(project_id.to_string())
        .bind(user_id.to_string())
        .fetch_optional(executor)
        .await?;

        row.as_ref().map(from_row).transpose()
    }

    pub async fn list_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
    ) -> DbErrorResult<Vec<ProjectMember>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT project_id, user_id, role, joined_at
                FROM tb_project_members
                WHERE project_id = ?
                ORDER BY joined_at ASC
            "#,
        )
        .bind(project_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter().map(from_row).collect()
    }

    pub async fn delete<'e, E>(executor: E, project_id: Uuid, user_id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result =
            sqlx::query("DELETE FROM tb_project_members WHERE project_id = ? AND user_id = ?")
                .bind(project_id.to_string())
                .bind(user_id.to_string())
                .execute(executor)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn from_row(row: &SqliteRow) -> DbErrorResult<ProjectMember> {
    Ok(ProjectMember {
        project_id: decode::uuid(row, "project_id")?,
        user_id: decode::uuid(row, "user_id")?,
        role: decode::parsed(row, "role")?,
        joined_at: decode::timestamp(row, "joined_at")?,
    })
}
