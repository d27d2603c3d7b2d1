use crate::{Project, Status};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_well_formed_key_when_validated_then_ok() {
    for key in ["TB", "WEB2", "ABCDEFGHIJ"] {
        assert_that!(Project::validate_key(key), ok(anything()));
    }
}

#[test]
fn given_malformed_key_when_validated_then_rejected() {
    for key in ["T", "tb", "2TB", "TOOLONGKEY1", "T-B", ""] {
        assert_that!(Project::validate_key(key), err(anything()));
    }
}

#[test]
fn given_project_when_task_code_requested_then_key_prefixed() {
    let project = Project::new("TB".into(), "Board".into(), None, Uuid::new_v4());
    assert_that!(project.task_code(42), eq("TB-42"));
}

#[test]
fn given_new_project_when_defaults_seeded_then_single_done_column_last() {
    // Given
    let project_id = Uuid::new_v4();

    // When
    let statuses = Status::defaults(project_id);

    // Then
    let orders: Vec<i64> = statuses.iter().map(|s| s.sort_order).collect();
    assert_eq!(orders, vec![0, 1, 2]);
    let done: Vec<&str> = statuses
        .iter()
        .filter(|s| s.is_done)
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(done, vec!["Done"]);
}
