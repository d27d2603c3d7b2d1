use crate::models::task::completion_after;
use crate::tests::fixtures::task_in;

use chrono::{Duration, Utc};
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_open_task_when_entering_done_column_then_completed_at_set() {
    // Given
    let todo = Uuid::new_v4();
    let done = Uuid::new_v4();
    let mut task = task_in(Uuid::new_v4(), todo, 0, Some(3));
    let now = Utc::now();

    // When
    task.enter_status(done, false, true, now);

    // Then
    assert_that!(task.status_id, eq(done));
    assert_that!(task.completed_at, some(eq(now)));
}

#[test]
fn given_done_task_when_reopened_then_completed_at_cleared() {
    // Given
    let mut task = task_in(Uuid::new_v4(), Uuid::new_v4(), 0, None);
    task.enter_status(Uuid::new_v4(), false, true, Utc::now());

    // When
    task.enter_status(Uuid::new_v4(), true, false, Utc::now());

    // Then
    assert_that!(task.completed_at, none());
}

#[test]
fn given_done_reopen_done_cycle_when_completed_again_then_stamp_is_fresh() {
    // Given
    let first = Utc::now();
    let second = first + Duration::minutes(5);
    let mut task = task_in(Uuid::new_v4(), Uuid::new_v4(), 0, None);

    // When
    task.enter_status(Uuid::new_v4(), false, true, first);
    task.enter_status(Uuid::new_v4(), true, false, first);
    task.enter_status(Uuid::new_v4(), false, true, second);

    // Then
    assert_that!(task.completed_at, some(eq(second)));
}

#[test]
fn given_move_between_done_columns_when_transitioned_then_original_stamp_kept() {
    let original = Utc::now() - Duration::days(2);
    let later = Utc::now();

    assert_that!(
        completion_after(Some(original), true, true, later),
        some(eq(original))
    );
    assert_that!(completion_after(None, true, true, later), some(eq(later)));
    assert_that!(completion_after(None, false, false, later), none());
}
