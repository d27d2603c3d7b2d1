use crate::decode::{self, date_text, millis};
use crate::error::Result as DbErrorResult;

use tb_core::TimeEntry;

use sqlx::Row;
use uuid::Uuid;

pub struct TimeEntryRepository;

impl TimeEntryRepository {
    pub async fn create<'e, E>(executor: E, entry: &TimeEntry) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        sqlx::query(
            r#"
                INSERT INTO tb_time_entries (id, task_id, user_id, hours, spent_on, note, created_at)
                VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(entry.id.to_string())
        .bind(entry.task_id.to_string())
        .bind(entry.user_id.to_string())
        .bind(entry.hours)
        .bind(date_text(entry.spent_on))
        .bind(&entry.note)
        .bind(millis(entry.created_at))
        .execute(executor)
        .await?;

        Ok(())
    }

    pub async fn list_by_task<'e, E>(executor: E, task_id: Uuid) -> DbErrorResult<Vec<TimeEntry>>
    where
        E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
    {
        let rows = sqlx::query(
            r#"
                SELECT id, task_id, user_id, hours, spent_on, note, created_at
                FROM tb_time_entries
                WHERE task_id = ?
                ORDER BY spent_on ASC, created_at ASC
            "#,
        )
        .bind(task_id.to_string())
        .fetch_all(executor)
        .await?;

        rows.iter()
            .map(|row| -> DbErrorResult<TimeEntry> {
                Ok(TimeEntry {
                    id: decode::uuid(row, "id")?,
                    task_id: decode::uuid(row, "task_id")?,
                    user_id: decode::uuid(row, "user_id")?,
                    hours: row.try_get("hours")?,
                    spent_on: decode::date(row, "spent_on")?,
                    note: row.try_get("note")?,
                    created_at: decode::timestamp(row, "created_at")?,
                })
            })
            .collect()
    }
}
