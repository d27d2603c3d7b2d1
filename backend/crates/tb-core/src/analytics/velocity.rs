use crate::{Sprint, SprintStatus, Task};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprintVelocity {
    pub sprint_id: Uuid,
    pub name: String,
    pub completed_at: DateTime<Utc>,
    pub committed_points: i64,
    pub completed_points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VelocityReport {
    pub sprints: Vec<SprintVelocity>,
    pub average_velocity: f64,
}

/// Velocity over the most recent `last_n` completed sprints, oldest first.
///
/// Committed points are every member task's points; completed points only
/// count tasks finished on or before the sprint closed.
pub fn velocity(sprints: &[Sprint], tasks: &[Task], last_n: usize) -> VelocityReport {
    let mut completed: Vec<(&Sprint, DateTime<Utc>)> = sprints
        .iter()
        .filter(|s| s.status == SprintStatus::Completed)
        .filter_map(|s| s.completed_at.map(|at| (s, at)))
        .collect();
    completed.sort_by_key(|(_, at)| *at);

    let skip = completed.len().saturating_sub(last_n);
    let rows: Vec<SprintVelocity> = completed
        .into_iter()
        .skip(skip)
        .map(|(sprint, closed_at)| {
            let members = tasks.iter().filter(|t| t.sprint_id == Some(sprint.id));
            let mut committed_points = 0;
            let mut completed_points = 0;
            for task in members {
                committed_points += task.points();
                if task.completed_at.is_some_and(|at| at <= closed_at) {
                    completed_points += task.points();
                }
            }
            SprintVelocity {
                sprint_id: sprint.id,
                name: sprint.name.clone(),
                completed_at: closed_at,
                committed_points,
                completed_points,
            }
        })
        .collect();

    let average_velocity = if rows.is_empty() {
        0.0
    } else {
        rows.iter().map(|r| r.completed_points as f64).sum::<f64>() / rows.len() as f64
    };

    VelocityReport {
        sprints: rows,
        average_velocity,
    }
}
