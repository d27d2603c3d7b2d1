use crate::tests::fixtures::{date, noon, sprint_between, task_in};
use crate::{BurndownMode, SprintChart, Task, sprint_chart};

use std::str::FromStr;

use chrono::{Days, NaiveDate};
use googletest::prelude::*;
use uuid::Uuid;

/// Ten-day sprint with 20 points: 8 of them completed by day 5.
fn ten_day_sprint() -> (crate::Sprint, Vec<Task>, NaiveDate) {
    let project_id = Uuid::new_v4();
    let start = date(2026, 3, 2);
    let sprint = sprint_between(project_id, start, start + Days::new(10));
    let status_id = Uuid::new_v4();

    let mut tasks: Vec<Task> = [5, 3, 4, 8]
        .into_iter()
        .enumerate()
        .map(|(i, points)| {
            let mut task = task_in(project_id, status_id, i as i64, Some(points));
            task.sprint_id = Some(sprint.id);
            task
        })
        .collect();
    tasks[0].completed_at = Some(noon(start + Days::new(2)));
    tasks[1].completed_at = Some(noon(start + Days::new(5)));

    (sprint, tasks, start)
}

#[test]
fn given_day_five_of_ten_when_burndown_then_ideal_ten_actual_twelve() {
    // Given
    let (sprint, tasks, start) = ten_day_sprint();
    let today = start + Days::new(5);

    // When
    let chart = sprint_chart(&sprint, &tasks, BurndownMode::Burndown, today);

    // Then
    let SprintChart::Burndown {
        total_points,
        points,
        ..
    } = chart
    else {
        panic!("expected burndown series");
    };
    assert_that!(total_points, eq(20));
    assert_that!(points, len(eq(11)));
    assert_that!(points[5].date, eq(today));
    assert_that!(points[5].ideal_remaining, eq(10.0));
    assert_that!(points[5].actual_remaining, some(eq(12)));
    assert_that!(points[0].ideal_remaining, eq(20.0));
    assert_that!(points[10].ideal_remaining, eq(0.0));
}

#[test]
fn given_future_days_when_burndown_then_actual_absent() {
    let (sprint, tasks, start) = ten_day_sprint();

    let chart = sprint_chart(&sprint, &tasks, BurndownMode::Burndown, start + Days::new(5));

    let SprintChart::Burndown { points, .. } = chart else {
        panic!("expected burndown series");
    };
    assert_that!(points[6].actual_remaining, none());
    assert_that!(points[10].actual_remaining, none());
}

#[test]
fn given_finished_sprint_when_burndown_then_last_point_matches_direct_sum() {
    // Given
    let (sprint, tasks, _) = ten_day_sprint();
    let completed: i64 = tasks
        .iter()
        .filter(|t| t.completed_at.is_some())
        .map(Task::points)
        .sum();

    // When
    let chart = sprint_chart(&sprint, &tasks, BurndownMode::Burndown, sprint.end_date);

    // Then
    let SprintChart::Burndown { points, .. } = chart else {
        panic!("expected burndown series");
    };
    let last = points.last().unwrap();
    assert_that!(last.actual_remaining, some(eq(20 - completed)));
}

#[test]
fn given_burnup_mode_when_charted_then_cumulative_completion() {
    let (sprint, tasks, start) = ten_day_sprint();

    let chart = sprint_chart(&sprint, &tasks, BurndownMode::Burnup, start + Days::new(10));

    let SprintChart::Burnup { points, .. } = chart else {
        panic!("expected burnup series");
    };
    assert_that!(points[1].actual_completed, some(eq(0)));
    assert_that!(points[2].actual_completed, some(eq(5)));
    assert_that!(points[5].actual_completed, some(eq(8)));
    assert_that!(points[5].ideal_completed, eq(10.0));
    assert_that!(points[5].total_points, eq(20));
}

#[test]
fn given_single_day_sprint_when_charted_then_one_point_with_zero_ideal() {
    let project_id = Uuid::new_v4();
    let day = date(2026, 4, 1);
    let sprint = sprint_between(project_id, day, day);
    let mut task = task_in(project_id, Uuid::new_v4(), 0, Some(2));
    task.sprint_id = Some(sprint.id);

    let chart = sprint_chart(&sprint, &[task], BurndownMode::Burndown, day);

    let SprintChart::Burndown { points, .. } = chart else {
        panic!("expected burndown series");
    };
    assert_that!(points, len(eq(1)));
    assert_that!(points[0].ideal_remaining, eq(0.0));
    assert_that!(points[0].actual_remaining, some(eq(2)));
}

#[test]
fn given_tasks_outside_sprint_when_charted_then_ignored() {
    let (sprint, mut tasks, start) = ten_day_sprint();
    let mut stray = task_in(sprint.project_id, Uuid::new_v4(), 9, Some(40));
    stray.completed_at = Some(noon(start));
    tasks.push(stray);

    let chart = sprint_chart(&sprint, &tasks, BurndownMode::Burndown, start);

    assert_that!(chart.total_points(), eq(20));
}

#[test]
fn given_mode_strings_when_parsed_then_known_modes_only() {
    assert_eq!(BurndownMode::from_str("burnup").unwrap(), BurndownMode::Burnup);
    assert_that!(BurndownMode::from_str("velocity"), err(anything()));
}
