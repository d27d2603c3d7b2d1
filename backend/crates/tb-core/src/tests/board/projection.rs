use crate::tests::fixtures::{status, task_in};
use crate::{BoardFilter, project_board};

use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_unordered_input_when_projected_then_columns_and_tasks_sorted() {
    // Given
    let project_id = Uuid::new_v4();
    let done = status(project_id, "Done", 2, true);
    let todo = status(project_id, "To Do", 0, false);
    let doing = status(project_id, "Doing", 1, false);
    let t1 = task_in(project_id, todo.id, 1, Some(3));
    let t0 = task_in(project_id, todo.id, 0, Some(5));
    let t2 = task_in(project_id, done.id, 0, None);

    // When
    let board = project_board(
        project_id,
        vec![done.clone(), todo.clone(), doing.clone()],
        vec![t1.clone(), t2.clone(), t0.clone()],
        &BoardFilter::default(),
    );

    // Then
    let names: Vec<&str> = board.columns.iter().map(|c| c.status.name.as_str()).collect();
    assert_eq!(names, vec!["To Do", "Doing", "Done"]);
    let todo_ids: Vec<Uuid> = board.columns[0].tasks.iter().map(|t| t.id).collect();
    assert_eq!(todo_ids, vec![t0.id, t1.id]);
    assert_that!(board.columns[0].total_points, eq(8));
    assert_that!(board.columns[1].tasks, is_empty());
    assert_that!(board.task_count(), eq(3));
}

#[test]
fn given_filters_when_projected_then_tasks_and_combined() {
    // Given
    let project_id = Uuid::new_v4();
    let todo = status(project_id, "To Do", 0, false);
    let sprint_id = Uuid::new_v4();
    let assignee = Uuid::new_v4();

    let mut both = task_in(project_id, todo.id, 0, None);
    both.sprint_id = Some(sprint_id);
    both.assignee_id = Some(assignee);
    let mut sprint_only = task_in(project_id, todo.id, 1, None);
    sprint_only.sprint_id = Some(sprint_id);
    let mut assignee_only = task_in(project_id, todo.id, 2, None);
    assignee_only.assignee_id = Some(assignee);

    let filter = BoardFilter {
        sprint_id: Some(sprint_id),
        epic_id: None,
        assignee_id: Some(assignee),
    };

    // When
    let board = project_board(
        project_id,
        vec![todo],
        vec![both.clone(), sprint_only, assignee_only],
        &filter,
    );

    // Then
    assert_that!(board.columns[0].tasks, len(eq(1)));
    assert_that!(board.columns[0].tasks[0].id, eq(both.id));
}
