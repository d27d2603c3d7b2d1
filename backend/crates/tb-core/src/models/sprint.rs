use crate::{CoreError, CoreResult, SprintStatus};

use std::panic::Location;

use chrono::{DateTime, NaiveDate, Utc};
use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Time-boxed container of tasks. Membership lives on `Task::sprint_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Sprint {
    pub id: Uuid,
    pub project_id: Uuid,

    pub name: String,
    pub goal: Option<String>,

    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    pub status: SprintStatus,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Uuid,
}

impl Sprint {
    pub fn new(
        project_id: Uuid,
        name: String,
        goal: Option<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        created_by: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            name,
            goal,
            start_date,
            end_date,
            status: SprintStatus::Planning,
            started_at: None,
            completed_at: None,
            created_at: now,
            updated_at: now,
            created_by,
        }
    }

    #[track_caller]
    pub fn validate_dates(start_date: NaiveDate, end_date: NaiveDate) -> CoreResult<()> {
        if end_date < start_date {
            return Err(CoreError::Validation {
                message: format!("Sprint end date {end_date} is before start date {start_date}"),
                field: Some("end_date".into()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(())
    }

    /// PLANNING -> ACTIVE. The one-active-sprint rule is enforced by the caller.
    #[track_caller]
    pub fn start(&mut self, now: DateTime<Utc>) -> CoreResult<()> {
        self.transition(SprintStatus::Planning, SprintStatus::Active)?;
        self.started_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// ACTIVE -> COMPLETED. Member tasks keep their sprint assignment.
    #[track_caller]
    pub fn complete(&mut self, now: DateTime<Utc>) -> CoreResult<()> {
        self.transition(SprintStatus::Active, SprintStatus::Completed)?;
        self.completed_at = Some(now);
        self.updated_at = now;
        Ok(())
    }

    /// Name, goal and dates are editable until the sprint completes.
    pub fn is_editable(&self) -> bool {
        self.status != SprintStatus::Completed
    }

    pub fn accepts_tasks(&self) -> bool {
        self.status != SprintStatus::Completed
    }

    #[track_caller]
    fn transition(&mut self, expected: SprintStatus, next: SprintStatus) -> CoreResult<()> {
        if self.status != expected {
            return Err(CoreError::InvalidTransition {
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        self.status = next;
        Ok(())
    }
}
