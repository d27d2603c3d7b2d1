use tb_config::RetryConfig;
use tb_core::{Status, Task};
use tb_engine::{
    CreateProjectInput, CreateTaskInput, HandlerContext, create_project, create_task,
    list_statuses,
};

use sqlx::SqlitePool;
use uuid::Uuid;

/// A project with its default columns: To Do, In Progress, Done.
pub struct TestBoard {
    pub ctx: HandlerContext,
    pub todo: Status,
    pub doing: Status,
    pub done: Status,
}

impl TestBoard {
    pub async fn new(pool: &SqlitePool) -> Self {
        let user_id = Uuid::new_v4();
        let ctx = HandlerContext::new(user_id, pool.clone()).with_retry_config(patient_retry());

        let key = format!("T{}", &Uuid::new_v4().simple().to_string()[..6].to_uppercase());
        let project = create_project(
            &ctx,
            CreateProjectInput {
                key,
                name: "Test Project".into(),
                description: None,
            },
        )
        .await
        .expect("Failed to create project");

        let ctx = ctx.with_project(project.id);
        let mut statuses = list_statuses(&ctx).await.expect("Failed to list statuses");
        let done = statuses.pop().expect("done status");
        let doing = statuses.pop().expect("in progress status");
        let todo = statuses.pop().expect("todo status");

        Self {
            ctx,
            todo,
            doing,
            done,
        }
    }

    pub fn project_id(&self) -> Uuid {
        self.ctx.project().expect("scoped context")
    }

    /// Same project, acting as another user.
    pub fn as_user(&self, user_id: Uuid) -> HandlerContext {
        let mut ctx = self.ctx.clone();
        ctx.user_id = user_id;
        ctx
    }

    pub async fn task(&self, title: &str) -> Task {
        create_task(&self.ctx, CreateTaskInput::new(title))
            .await
            .expect("Failed to create task")
    }

    pub async fn task_with_points(&self, title: &str, points: i64) -> Task {
        let mut input = CreateTaskInput::new(title);
        input.story_points = Some(points);
        create_task(&self.ctx, input)
            .await
            .expect("Failed to create task")
    }
}

/// Enough attempts that contended writers in tests always get through.
pub fn patient_retry() -> RetryConfig {
    RetryConfig {
        max_attempts: 10,
        initial_delay_ms: 5,
        max_delay_ms: 100,
        backoff_multiplier: 2.0,
        jitter: true,
    }
}

/// Orders a column snapshot by position and returns `(id, position)` pairs.
pub fn placements(tasks: &[Task], status_id: Uuid) -> Vec<(Uuid, i64)> {
    let mut column: Vec<(Uuid, i64)> = tasks
        .iter()
        .filter(|t| t.status_id == status_id)
        .map(|t| (t.id, t.position))
        .collect();
    column.sort_by_key(|(_, position)| *position);
    column
}

/// Positions of the column are exactly `0..n`.
pub fn assert_dense(tasks: &[Task], status_id: Uuid) {
    let positions: Vec<i64> = placements(tasks, status_id)
        .into_iter()
        .map(|(_, position)| position)
        .collect();
    let expected: Vec<i64> = (0..positions.len() as i64).collect();
    assert_eq!(positions, expected, "column {status_id} is not dense");
}
