use crate::{Priority, TaskType};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: Uuid,
    pub project_id: Uuid,
    pub code: String,

    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub priority: Priority,
    pub story_points: Option<i64>,

    // Board placement
    pub status_id: Uuid,
    pub position: i64,

    // Weak grouping references
    pub epic_id: Option<Uuid>,
    pub sprint_id: Option<Uuid>,

    pub assignee_id: Option<Uuid>,
    pub reporter_id: Uuid,

    pub estimated_hours: Option<f64>,
    /// Sum of the task's time entries, never written directly.
    pub logged_hours: f64,

    pub due_date: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        project_id: Uuid,
        code: String,
        title: String,
        task_type: TaskType,
        priority: Priority,
        status_id: Uuid,
        position: i64,
        reporter_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            code,
            title,
            description: None,
            task_type,
            priority,
            story_points: None,
            status_id,
            position,
            epic_id: None,
            sprint_id: None,
            assignee_id: None,
            reporter_id,
            estimated_hours: None,
            logged_hours: 0.0,
            due_date: None,
            start_date: None,
            created_at: now,
            updated_at: now,
            completed_at: None,
        }
    }

    pub fn points(&self) -> i64 {
        self.story_points.unwrap_or(0)
    }

    /// Moves the task into another column and derives `completed_at` from the
    /// done flags of the two statuses.
    pub fn enter_status(
        &mut self,
        status_id: Uuid,
        was_done: bool,
        now_done: bool,
        now: DateTime<Utc>,
    ) {
        self.status_id = status_id;
        self.completed_at = completion_after(self.completed_at, was_done, now_done, now);
        self.updated_at = now;
    }
}

/// Entering a done column stamps a fresh completion time, leaving one clears
/// it, and moving between done columns keeps the original stamp.
pub fn completion_after(
    current: Option<DateTime<Utc>>,
    was_done: bool,
    now_done: bool,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match (was_done, now_done) {
        (_, false) => None,
        (false, true) => Some(now),
        (true, true) => current.or(Some(now)),
    }
}
