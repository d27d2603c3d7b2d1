use crate::{CoreError, CoreResult, Sprint, Task};

use std::panic::Location;
use std::str::FromStr;

use chrono::NaiveDate;
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BurndownMode {
    #[default]
    Burndown,
    Burnup,
}

impl BurndownMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Burndown => "burndown",
            Self::Burnup => "burnup",
        }
    }
}

impl FromStr for BurndownMode {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "burndown" => Ok(Self::Burndown),
            "burnup" => Ok(Self::Burnup),
            _ => Err(CoreError::Validation {
                message: format!("Unknown chart mode: {s}"),
                field: Some("mode".into()),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownPoint {
    pub date: NaiveDate,
    pub ideal_remaining: f64,
    /// `None` for days that have not happened yet.
    pub actual_remaining: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurnupPoint {
    pub date: NaiveDate,
    pub total_points: i64,
    pub ideal_completed: f64,
    pub actual_completed: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SprintChart {
    Burndown {
        sprint_id: Uuid,
        total_points: i64,
        points: Vec<BurndownPoint>,
    },
    Burnup {
        sprint_id: Uuid,
        total_points: i64,
        points: Vec<BurnupPoint>,
    },
}

impl SprintChart {
    pub fn total_points(&self) -> i64 {
        match self {
            Self::Burndown { total_points, .. } | Self::Burnup { total_points, .. } => {
                *total_points
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Burndown { points, .. } => points.len(),
            Self::Burnup { points, .. } => points.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One sample per calendar day of the sprint, `start_date..=end_date`.
struct DailySample {
    date: NaiveDate,
    ideal_completed: f64,
    actual_completed: Option<i64>,
}

/// Builds the burndown or burnup series for `sprint` from its member `tasks`.
///
/// A task counts as completed on day D when its `completed_at` falls on or
/// before D (UTC). Days after `today` have no actual value.
pub fn sprint_chart(
    sprint: &Sprint,
    tasks: &[Task],
    mode: BurndownMode,
    today: NaiveDate,
) -> SprintChart {
    let members: Vec<&Task> = tasks
        .iter()
        .filter(|t| t.sprint_id == Some(sprint.id))
        .collect();
    let total_points: i64 = members.iter().map(|t| t.points()).sum();

    let mut completions: Vec<(NaiveDate, i64)> = members
        .iter()
        .filter_map(|t| t.completed_at.map(|at| (at.date_naive(), t.points())))
        .collect();
    completions.sort_by_key(|(date, _)| *date);

    let span = (sprint.end_date - sprint.start_date).num_days().max(0);
    let samples = daily_samples(sprint.start_date, span, total_points, &completions, today);

    match mode {
        BurndownMode::Burndown => SprintChart::Burndown {
            sprint_id: sprint.id,
            total_points,
            points: samples
                .into_iter()
                .map(|s| BurndownPoint {
                    date: s.date,
                    ideal_remaining: total_points as f64 - s.ideal_completed,
                    actual_remaining: s.actual_completed.map(|done| total_points - done),
                })
                .collect(),
        },
        BurndownMode::Burnup => SprintChart::Burnup {
            sprint_id: sprint.id,
            total_points,
            points: samples
                .into_iter()
                .map(|s| BurnupPoint {
                    date: s.date,
                    total_points,
                    ideal_completed: s.ideal_completed,
                    actual_completed: s.actual_completed,
                })
                .collect(),
        },
    }
}

fn daily_samples(
    start: NaiveDate,
    span: i64,
    total_points: i64,
    completions: &[(NaiveDate, i64)],
    today: NaiveDate,
) -> Vec<DailySample> {
    let mut samples = Vec::with_capacity(span as usize + 1);
    let mut completed = 0;
    let mut pending = completions.iter().peekable();

    for (index, date) in start.iter_days().take(span as usize + 1).enumerate() {
        while let Some((_, points)) = pending.next_if(|(at, _)| *at <= date) {
            completed += points;
        }

        let ideal_completed = if span == 0 {
            total_points as f64
        } else {
            total_points as f64 * index as f64 / span as f64
        };

        samples.push(DailySample {
            date,
            ideal_completed,
            actual_completed: (date <= today).then_some(completed),
        });
    }

    samples
}
