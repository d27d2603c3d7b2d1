use crate::SprintMetrics;
use crate::tests::fixtures::{date, sprint_between, task_in};

use std::collections::HashSet;

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_sprint_midway_when_metrics_computed_then_aggregates_derived() {
    // Given
    let project_id = Uuid::new_v4();
    let todo = Uuid::new_v4();
    let done = Uuid::new_v4();
    let sprint = sprint_between(project_id, date(2026, 3, 2), date(2026, 3, 12));

    let mut tasks = Vec::new();
    for (status_id, points) in [(done, 5), (done, 3), (todo, 4), (todo, 8)] {
        let mut task = task_in(project_id, status_id, 0, Some(points));
        task.sprint_id = Some(sprint.id);
        tasks.push(task);
    }
    tasks.push(task_in(project_id, done, 1, Some(13)));

    // When
    let metrics = SprintMetrics::compute(
        &sprint,
        &tasks,
        &HashSet::from([done]),
        date(2026, 3, 8),
    );

    // Then
    assert_that!(metrics.task_count, eq(4));
    assert_that!(metrics.completed_task_count, eq(2));
    assert_that!(metrics.total_points, eq(20));
    assert_that!(metrics.completed_points, eq(8));
    assert_that!(metrics.remaining_points, eq(12));
    assert_that!(metrics.total_days, eq(10));
    assert_that!(metrics.days_elapsed, eq(6));
    assert_that!(metrics.days_remaining, eq(4));
    assert_that!(metrics.daily_burn_rate, eq(3.0));
}

#[test]
fn given_today_outside_sprint_when_metrics_computed_then_days_clamped() {
    let project_id = Uuid::new_v4();
    let sprint = sprint_between(project_id, date(2026, 3, 2), date(2026, 3, 12));
    let mut task = task_in(project_id, Uuid::new_v4(), 0, Some(6));
    task.sprint_id = Some(sprint.id);

    let before = SprintMetrics::compute(&sprint, &[task.clone()], &HashSet::new(), date(2026, 2, 1));
    assert_that!(before.days_elapsed, eq(0));
    assert_that!(before.days_remaining, eq(10));

    let after = SprintMetrics::compute(&sprint, &[task], &HashSet::new(), date(2026, 5, 1));
    assert_that!(after.days_elapsed, eq(10));
    assert_that!(after.days_remaining, eq(0));
    assert_that!(after.daily_burn_rate, eq(6.0));
}
