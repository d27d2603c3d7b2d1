use crate::tests::fixtures::{date, sprint_between};
use crate::{CoreError, Sprint, SprintStatus};

use chrono::Utc;
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_planning_sprint_when_started_then_active_with_started_at() {
    // Given
    let mut sprint = sprint_between(Uuid::new_v4(), date(2026, 3, 2), date(2026, 3, 13));
    let now = Utc::now();

    // When
    let result = sprint.start(now);

    // Then
    assert_that!(result, ok(anything()));
    assert_that!(sprint.status, eq(SprintStatus::Active));
    assert_that!(sprint.started_at, some(eq(now)));
}

#[test]
fn given_planning_sprint_when_completed_then_transition_rejected() {
    // Given
    let mut sprint = sprint_between(Uuid::new_v4(), date(2026, 3, 2), date(2026, 3, 13));

    // When
    let result = sprint.complete(Utc::now());

    // Then
    assert!(matches!(result, Err(CoreError::InvalidTransition { .. })));
    assert_that!(sprint.status, eq(SprintStatus::Planning));
    assert_that!(sprint.completed_at, none());
}

#[test]
fn given_completed_sprint_when_started_again_then_rejected() {
    // Given
    let mut sprint = sprint_between(Uuid::new_v4(), date(2026, 3, 2), date(2026, 3, 13));
    sprint.start(Utc::now()).unwrap();
    sprint.complete(Utc::now()).unwrap();

    // When
    let restart = sprint.start(Utc::now());

    // Then
    assert!(matches!(restart, Err(CoreError::InvalidTransition { .. })));
    assert_that!(sprint.status, eq(SprintStatus::Completed));
    assert!(!sprint.is_editable());
    assert!(!sprint.accepts_tasks());
}

#[test]
fn given_end_before_start_when_dates_validated_then_rejected() {
    assert_that!(
        Sprint::validate_dates(date(2026, 3, 10), date(2026, 3, 9)),
        err(anything())
    );
    assert_that!(
        Sprint::validate_dates(date(2026, 3, 10), date(2026, 3, 10)),
        ok(anything())
    );
}
