use crate::tests::fixtures::{date, noon, sprint_between, task_in};
use crate::{Sprint, SprintStatus, velocity};

use chrono::{Days, Duration};
use googletest::prelude::*;
use uuid::Uuid;

fn closed_sprint(project_id: Uuid, start_day: u32) -> Sprint {
    let start = date(2026, 1, start_day);
    let mut sprint = sprint_between(project_id, start, start + Days::new(7));
    sprint.status = SprintStatus::Completed;
    sprint.started_at = Some(noon(start));
    sprint.completed_at = Some(noon(start + Days::new(7)));
    sprint
}

#[test]
fn given_completed_sprints_when_velocity_then_only_on_time_points_count() {
    // Given
    let project_id = Uuid::new_v4();
    let sprint = closed_sprint(project_id, 5);
    let closed_at = sprint.completed_at.unwrap();

    let mut on_time = task_in(project_id, Uuid::new_v4(), 0, Some(5));
    on_time.sprint_id = Some(sprint.id);
    on_time.completed_at = Some(closed_at - Duration::hours(2));

    let mut late = task_in(project_id, Uuid::new_v4(), 1, Some(3));
    late.sprint_id = Some(sprint.id);
    late.completed_at = Some(closed_at + Duration::hours(2));

    let mut open = task_in(project_id, Uuid::new_v4(), 2, Some(2));
    open.sprint_id = Some(sprint.id);

    // When
    let report = velocity(&[sprint], &[on_time, late, open], 5);

    // Then
    assert_that!(report.sprints, len(eq(1)));
    assert_that!(report.sprints[0].committed_points, eq(10));
    assert_that!(report.sprints[0].completed_points, eq(5));
    assert_that!(report.average_velocity, eq(5.0));
}

#[test]
fn given_more_sprints_than_requested_when_velocity_then_most_recent_kept_in_order() {
    // Given
    let project_id = Uuid::new_v4();
    let sprints = vec![
        closed_sprint(project_id, 19),
        closed_sprint(project_id, 5),
        closed_sprint(project_id, 12),
        sprint_between(project_id, date(2026, 1, 26), date(2026, 2, 2)),
    ];

    // When
    let report = velocity(&sprints, &[], 2);

    // Then
    let ids: Vec<Uuid> = report.sprints.iter().map(|s| s.sprint_id).collect();
    assert_eq!(ids, vec![sprints[2].id, sprints[0].id]);
    assert_that!(report.average_velocity, eq(0.0));
}

#[test]
fn given_no_completed_sprints_when_velocity_then_empty_report() {
    let report = velocity(&[], &[], 3);
    assert_that!(report.sprints, is_empty());
    assert_that!(report.average_velocity, eq(0.0));
}
