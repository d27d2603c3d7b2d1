use crate::{CoreError, CoreResult};

use std::panic::Location;

use error_location::ErrorLocation;
use uuid::Uuid;

/// Dense position assignments produced by a move.
///
/// `source` holds the renumbered column the task left and is empty for a move
/// within one column, where every assignment lives in `destination`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovePlan {
    pub task_id: Uuid,
    pub position: i64,
    pub cross_column: bool,
    pub source: Vec<(Uuid, i64)>,
    pub destination: Vec<(Uuid, i64)>,
}

impl MovePlan {
    /// Every `(task, position)` pair the move settles on, source column first.
    pub fn assignments(&self) -> impl Iterator<Item = &(Uuid, i64)> {
        self.source.iter().chain(self.destination.iter())
    }
}

/// Assigns `0..n-1` to the sequence in order.
pub fn renumber(sequence: &[Uuid]) -> Vec<(Uuid, i64)> {
    sequence
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, index as i64))
        .collect()
}

/// Plans moving `task_id` out of the ordered `source` column and into
/// `destination` at index `target`. `None` for the destination means the task
/// stays in its own column.
///
/// Out-of-range targets clamp to the nearest bound.
#[track_caller]
pub fn plan_move(
    source: &[Uuid],
    destination: Option<&[Uuid]>,
    task_id: Uuid,
    target: i64,
) -> CoreResult<MovePlan> {
    if !source.contains(&task_id) {
        return Err(CoreError::Validation {
            message: format!("Task {task_id} is not in its source column"),
            field: Some("task_id".into()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let remaining: Vec<Uuid> = source.iter().copied().filter(|id| *id != task_id).collect();

    match destination {
        None => {
            let mut column = remaining;
            let index = clamp_index(target, column.len());
            column.insert(index, task_id);
            Ok(MovePlan {
                task_id,
                position: index as i64,
                cross_column: false,
                source: Vec::new(),
                destination: renumber(&column),
            })
        }
        Some(destination) => {
            if destination.contains(&task_id) {
                return Err(CoreError::Validation {
                    message: format!("Task {task_id} is already in the destination column"),
                    field: Some("status_id".into()),
                    location: ErrorLocation::from(Location::caller()),
                });
            }
            let mut column = destination.to_vec();
            let index = clamp_index(target, column.len());
            column.insert(index, task_id);
            Ok(MovePlan {
                task_id,
                position: index as i64,
                cross_column: true,
                source: renumber(&remaining),
                destination: renumber(&column),
            })
        }
    }
}

fn clamp_index(target: i64, len: usize) -> usize {
    if target <= 0 {
        0
    } else {
        (target as u64).min(len as u64) as usize
    }
}
