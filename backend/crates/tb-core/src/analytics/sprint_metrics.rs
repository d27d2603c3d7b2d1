use crate::{Sprint, SprintStatus, Task};

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Derived sprint aggregates. Computed on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintMetrics {
    pub sprint_id: Uuid,
    pub status: SprintStatus,
    pub task_count: usize,
    pub completed_task_count: usize,
    pub total_points: i64,
    pub completed_points: i64,
    pub remaining_points: i64,
    pub total_days: i64,
    pub days_elapsed: i64,
    pub days_remaining: i64,
    pub daily_burn_rate: f64,
}

impl SprintMetrics {
    /// `done_status_ids` is the project's set of done columns; a member task
    /// counts as completed when it currently sits in one of them.
    pub fn compute(
        sprint: &Sprint,
        tasks: &[Task],
        done_status_ids: &HashSet<Uuid>,
        today: NaiveDate,
    ) -> Self {
        let members = tasks.iter().filter(|t| t.sprint_id == Some(sprint.id));

        let mut task_count = 0;
        let mut completed_task_count = 0;
        let mut total_points = 0;
        let mut completed_points = 0;
        for task in members {
            task_count += 1;
            total_points += task.points();
            if done_status_ids.contains(&task.status_id) {
                completed_task_count += 1;
                completed_points += task.points();
            }
        }
        let remaining_points = total_points - completed_points;

        let total_days = (sprint.end_date - sprint.start_date).num_days().max(0);
        let days_elapsed = (today - sprint.start_date)
            .num_days()
            .clamp(0, total_days);
        let days_remaining = total_days - days_elapsed;

        Self {
            sprint_id: sprint.id,
            status: sprint.status,
            task_count,
            completed_task_count,
            total_points,
            completed_points,
            remaining_points,
            total_days,
            days_elapsed,
            days_remaining,
            daily_burn_rate: remaining_points as f64 / days_remaining.max(1) as f64,
        }
    }
}
