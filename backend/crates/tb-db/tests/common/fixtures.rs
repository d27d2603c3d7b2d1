use tb_core::{Priority, Project, Sprint, Status, Task, TaskType};
use tb_db::{ProjectRepository, StatusRepository};

use chrono::NaiveDate;
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicI64, Ordering};
use uuid::Uuid;

/// Task codes are unique across the database, so fixtures never reuse a number.
static NEXT_TASK_NUMBER: AtomicI64 = AtomicI64::new(1);

pub fn create_test_project(user_id: Uuid) -> Project {
    let key = format!("T{}", &Uuid::new_v4().simple().to_string()[..6].to_uppercase());
    Project::new(key, "Test Project".into(), None, user_id)
}

/// Inserts a project with the default status set and returns both.
pub async fn seed_project(pool: &SqlitePool, user_id: Uuid) -> (Project, Vec<Status>) {
    let project = create_test_project(user_id);
    ProjectRepository::create(pool, &project).await.unwrap();

    let statuses = Status::defaults(project.id);
    for status in &statuses {
        StatusRepository::create(pool, status).await.unwrap();
    }

    (project, statuses)
}

pub fn create_test_task(project: &Project, status_id: Uuid, position: i64, user_id: Uuid) -> Task {
    Task::new(
        project.id,
        project.task_code(NEXT_TASK_NUMBER.fetch_add(1, Ordering::Relaxed)),
        format!("Task {position}"),
        TaskType::Task,
        Priority::Medium,
        status_id,
        position,
        user_id,
    )
}

pub fn create_test_sprint(project_id: Uuid, user_id: Uuid) -> Sprint {
    Sprint::new(
        project_id,
        "Sprint 1".into(),
        Some("Ship the board".into()),
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, 13).unwrap(),
        user_id,
    )
}
