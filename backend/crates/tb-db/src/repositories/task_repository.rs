use crate::decode::{self, date_text, millis};
use crate::error::Result as DbErrorResult;

use tb_core::{BoardFilter, Task};

use chrono::{DateTime, Utc};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;
use uuid::Uuid;

/// Optional equality filters for task listings, AND-combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status_id: Option<Uuid>,
    pub sprint_id: Option<Uuid>,
    pub epic_id: Option<Uuid>,
    pub assignee_id: Option<Uuid>,
}

impl From<&BoardFilter> for TaskFilter {
    fn from(filter: &BoardFilter) -> Self {
        Self {
            status_id: None,
            sprint_id: filter.sprint_id,
            epic_id: filter.epic_id,
            assignee_id: filter.assignee_id,
        }
    }
}

pub struct TaskRepository;

const SELECT_TASK: &str = r#"
    SELECT
        t.id, t.project_id, t.code, t.title, t.description, t.task_type, t.priority,
        t.story_points, t.status_id, t.position, t.epic_id, t.sprint_id,
        t.assignee_id, t.reporter_id, t.estimated_hours,
        (SELECT COALESCE(SUM(te.hours), 0.0) FROM tb_time_entries te WHERE te.task_id = t.id)
            AS logged_hours,
        t.due_date, t.start_date, t.created_at, t.updated_at, t.completed_at
    FROM tb_tasks t
"#;

impl TaskRepository {
    pub async fn create<'e, E>(executor: E, task: &Task) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tb_tasks (
                    id, project_id, code, title, description, task_type, priority,
                    story_points, status_id, position, epic_id, sprint_id,
                    assignee_id, reporter_id, estimated_hours, due_date, start_date,
                    created_at, updated_at, completed_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(task.id.to_string())
        .bind(task.project_id.to_string())
        .bind(&task.code)
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.task_type.as_str())
        .bind(task.priority.as_str())
        .bind(task.story_points)
        .bind(task.status_id.to_string())
        .bind(task.position)
        .bind(task.epic_id.map(|id| id.to_string()))
        .bind(task.sprint_id.map(|id| id.to_string()))
        .bind(task.assignee_id.map(|id| id.to_string()))
        .bind(task.reporter_id.to_string())
        .bind(task.estimated_hours)
        .bind(task.due_date.map(date_text))
        .bind(task.start_date.map(date_text))
        .bind(millis(task.created_at))
        .bind(millis(task.updated_at))
        .bind(task.completed_at.map(millis))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn find_by_id<'e, E>(executor: E, id: Uuid) -> DbErrorResult<Option<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_TASK} WHERE t.id = ?");
        let row = sqlx::query(&sql)
            .bind(id.to_string())
            .fetch_optional(executor)
            .await?;

        row.as_ref().map(from_row).transpose()
    }

    /// Tasks of a project in board order (column, then position).
    pub async fn list_by_project<'e, E>(
        executor: E,
        project_id: Uuid,
        filter: &TaskFilter,
    ) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!(
            r#"{SELECT_TASK}
                WHERE t.project_id = ?
                  AND (? IS NULL OR t.status_id = ?)
                  AND (? IS NULL OR t.sprint_id = ?)
                  AND (? IS NULL OR t.epic_id = ?)
                  AND (? IS NULL OR t.assignee_id = ?)
                ORDER BY
                    (SELECT s.sort_order FROM tb_statuses s WHERE s.id = t.status_id),
                    t.position ASC,
                    t.created_at ASC
            "#
        );

        let status_id = filter.status_id.map(|id| id.to_string());
        let sprint_id = filter.sprint_id.map(|id| id.to_string());
        let epic_id = filter.epic_id.map(|id| id.to_string());
        let assignee_id = filter.assignee_id.map(|id| id.to_string());

        let rows = sqlx::query(&sql)
            .bind(project_id.to_string())
            .bind(&status_id)
            .bind(&status_id)
            .bind(&sprint_id)
            .bind(&sprint_id)
            .bind(&epic_id)
            .bind(&epic_id)
            .bind(&assignee_id)
            .bind(&assignee_id)
            .fetch_all(executor)
            .await?;

        rows.iter().map(from_row).collect()
    }

    pub async fn list_by_sprint<'e, E>(executor: E, sprint_id: Uuid) -> DbErrorResult<Vec<Task>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let sql = format!("{SELECT_TASK} WHERE t.sprint_id = ? ORDER BY t.created_at ASC");
        let rows = sqlx::query(&sql)
            .bind(sprint_id.to_string())
            .fetch_all(executor)
            .await?;

        rows.iter().map(from_row).collect()
    }

    /// Ordered `(task, position)` pairs of one column.
    pub async fn column<'e, E>(executor: E, status_id: Uuid) -> DbErrorResult<Vec<(Uuid, i64)>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, position
                FROM tb_tasks
                WHERE status_id = ?
                ORDER BY position ASC, created_at ASC, id ASC
            "#,
        )
        .bind(status_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter()
            .map(|row| -> DbErrorResult<(Uuid, i64)> {
                Ok((decode::uuid(row, "id")?, row.try_get("position")?))
            })
            .collect()
    }

    /// Writes every editable field except column placement.
    pub async fn update_details<'e, E>(executor: E, task: &Task) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE tb_tasks
                SET title = ?, description = ?, task_type = ?, priority = ?,
                    story_points = ?, epic_id = ?, sprint_id = ?, assignee_id = ?,
                    estimated_hours = ?, due_date = ?, start_date = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&task.title)
        .bind(&task.description)
        .bind(task.task_type.as_str())
        .bind(task.priority.as_str())
        .bind(task.story_points)
        .bind(task.epic_id.map(|id| id.to_string()))
        .bind(task.sprint_id.map(|id| id.to_string()))
        .bind(task.assignee_id.map(|id| id.to_string()))
        .bind(task.estimated_hours)
        .bind(task.due_date.map(date_text))
        .bind(task.start_date.map(date_text))
        .bind(millis(task.updated_at))
        .bind(task.id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Stamps `updated_at` on a task of `project_id`. Issued as the first
    /// statement of a write transaction so the write lock is held before any
    /// read. Returns `false` when no such task exists in the project.
    pub async fn claim<'e, E>(
        executor: E,
        project_id: Uuid,
        task_id: Uuid,
        now: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result =
            sqlx::query("UPDATE tb_tasks SET updated_at = ? WHERE id = ? AND project_id = ?")
                .bind(millis(now))
                .bind(task_id.to_string())
                .bind(project_id.to_string())
                .execute(executor)
                .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Moves the task into a column slot, with the derived completion stamp.
    pub async fn set_placement<'e, E>(
        executor: E,
        task_id: Uuid,
        status_id: Uuid,
        position: i64,
        completed_at: Option<DateTime<Utc>>,
        updated_at: DateTime<Utc>,
    ) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE tb_tasks
                SET status_id = ?, position = ?, completed_at = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(status_id.to_string())
        .bind(position)
        .bind(completed_at.map(millis))
        .bind(millis(updated_at))
        .bind(task_id.to_string())
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    pub async fn set_position<'e, E>(executor: E, task_id: Uuid, position: i64) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query("UPDATE tb_tasks SET position = ? WHERE id = ?")
            .bind(position)
            .bind(task_id.to_string())
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Removes the task. Dependency edges, comments and time entries cascade.
    pub async fn delete<'e, E>(executor: E, id: Uuid) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let result = sqlx::query("DELETE FROM tb_tasks WHERE id = ?")
            .bind(id.to_string())
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn from_row(row: &SqliteRow) -> DbErrorResult<Task> {
    Ok(Task {
        id: decode::uuid(row, "id")?,
        project_id: decode::uuid(row, "project_id")?,
        code: row.try_get("code")?,
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        task_type: decode::parsed(row, "task_type")?,
        priority: decode::parsed(row, "priority")?,
        story_points: row.try_get("story_points")?,
        status_id: decode::uuid(row, "status_id")?,
        position: row.try_get("position")?,
        epic_id: decode::opt_uuid(row, "epic_id")?,
        sprint_id: decode::opt_uuid(row, "sprint_id")?,
        assignee_id: decode::opt_uuid(row, "assignee_id")?,
        reporter_id: decode::uuid(row, "reporter_id")?,
        estimated_hours: row.try_get("estimated_hours")?,
        logged_hours: row.try_get("logged_hours")?,
        due_date: decode::opt_date(row, "due_date")?,
        start_date: decode::opt_date(row, "start_date")?,
        created_at: decode::timestamp(row, "created_at")?,
        updated_at: decode::timestamp(row, "updated_at")?,
        completed_at: decode::opt_timestamp(row, "completed_at")?,
    })
}
