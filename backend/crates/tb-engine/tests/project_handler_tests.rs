mod common;

use common::{TestBoard, create_test_pool};

use tb_core::MemberRole;
use tb_engine::{
    AddMemberInput, CreateProjectInput, CreateStatusInput, EngineError, HandlerContext,
    MoveTarget, add_member, create_project, create_status, delete_status, get_project,
    list_members, list_projects, list_statuses, move_task,
};

use googletest::prelude::*;
use uuid::Uuid;

fn project_input(key: &str) -> CreateProjectInput {
    CreateProjectInput {
        key: key.into(),
        name: "Platform".into(),
        description: Some("Core services".into()),
    }
}

#[tokio::test]
async fn given_new_project_when_created_then_default_statuses_and_admin_seeded() {
    // Given
    let pool = create_test_pool().await;
    let user_id = Uuid::new_v4();
    let ctx = HandlerContext::new(user_id, pool.clone());

    // When
    let project = create_project(&ctx, project_input("PLAT")).await.unwrap();

    // Then
    let ctx = ctx.with_project(project.id);
    let statuses = list_statuses(&ctx).await.unwrap();
    let columns: Vec<(&str, i64, bool)> = statuses
        .iter()
        .map(|s| (s.name.as_str(), s.sort_order, s.is_done))
        .collect();
    assert_eq!(
        columns,
        vec![("To Do", 0, false), ("In Progress", 1, false), ("Done", 2, true)]
    );

    let members = list_members(&ctx).await.unwrap();
    assert_that!(members.len(), eq(1));
    assert_that!(members[0].user_id, eq(user_id));
    assert_that!(members[0].role, eq(MemberRole::Admin));

    let stored = get_project(&ctx).await.unwrap();
    assert_that!(stored.key.as_str(), eq("PLAT"));
}

#[tokio::test]
async fn given_taken_key_when_project_created_then_conflict() {
    // Given
    let pool = create_test_pool().await;
    let ctx = HandlerContext::new(Uuid::new_v4(), pool.clone());
    create_project(&ctx, project_input("DUP")).await.unwrap();

    // When
    let result = create_project(&ctx, project_input("DUP")).await;

    // Then
    assert!(matches!(result, Err(EngineError::Conflict { .. })));
    assert_that!(list_projects(&ctx).await.unwrap().len(), eq(1));
}

#[tokio::test]
async fn given_malformed_key_when_project_created_then_validation_error() {
    let pool = create_test_pool().await;
    let ctx = HandlerContext::new(Uuid::new_v4(), pool.clone());

    let result = create_project(&ctx, project_input("no spaces allowed")).await;

    assert!(matches!(result, Err(EngineError::Validation { .. })));
}

#[tokio::test]
async fn given_unscoped_context_when_project_operation_called_then_validation_error() {
    let pool = create_test_pool().await;
    let ctx = HandlerContext::new(Uuid::new_v4(), pool.clone());

    let result = list_statuses(&ctx).await;

    assert!(matches!(
        result,
        Err(EngineError::Validation { field: Some(ref f), .. }) if f == "project_id"
    ));
}

#[tokio::test]
async fn given_unknown_project_when_read_then_not_found() {
    let pool = create_test_pool().await;
    let ctx = HandlerContext::new(Uuid::new_v4(), pool.clone()).with_project(Uuid::new_v4());

    let result = get_project(&ctx).await;

    assert!(matches!(result, Err(EngineError::NotFound { .. })));
}

#[tokio::test]
async fn given_existing_member_when_added_again_then_role_replaced() {
    // Given
    let pool = create_test_pool().await;
    let board = TestBoard::new(&pool).await;
    let user_id = Uuid::new_v4();
    let member = |role| AddMemberInput { user_id, role };
    add_member(&board.ctx, member(MemberRole::Viewer)).await.unwrap();

    // When
    add_member(&board.ctx, member(MemberRole::Member)).await.unwrap();

    // Then
    let members = list_members(&board.ctx).await.unwrap();
    assert_that!(members.len(), eq(2));
    let added = members.iter().find(|m| m.user_id == user_id).unwrap();
    assert_that!(added.role, eq(MemberRole::Member));
}

#[tokio::test]
async fn given_project_when_status_created_then_appended_after_last() {
    // Given
    let pool = create_test_pool().await;
    let board = TestBoard::new(&pool).await;

    // When
    let review = create_status(
        &board.ctx,
        CreateStatusInput {
            name: "Review".into(),
            color: None,
            is_done: false,
        },
    )
    .await
    .unwrap();

    // Then
    assert_that!(review.sort_order, eq(3));
    let names: Vec<String> = list_statuses(&board.ctx)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["To Do", "In Progress", "Done", "Review"]);
}

#[tokio::test]
async fn given_status_with_tasks_when_deleted_then_conflict() {
    // Given
    let pool = create_test_pool().await;
    let board = TestBoard::new(&pool).await;
    board.task("occupant").await;

    // When
    let result = delete_status(&board.ctx, board.todo.id).await;

    // Then
    assert!(matches!(result, Err(EngineError::Conflict { .. })));
}

#[tokio::test]
async fn given_last_open_status_when_deleted_then_invalid_state() {
    // Given
    let pool = create_test_pool().await;
    let board = TestBoard::new(&pool).await;
    delete_status(&board.ctx, board.doing.id).await.unwrap();

    // When
    let result = delete_status(&board.ctx, board.todo.id).await;

    // Then
    assert!(matches!(result, Err(EngineError::InvalidState { .. })));
    assert_that!(list_statuses(&board.ctx).await.unwrap().len(), eq(2));
}

#[tokio::test]
async fn given_emptied_status_when_deleted_then_removed() {
    // Given
    let pool = create_test_pool().await;
    let board = TestBoard::new(&pool).await;
    let task = board.task("passing through").await;
    move_task(
        &board.ctx,
        task.id,
        MoveTarget {
            status_id: Some(board.doing.id),
            position: 0,
        },
    )
    .await
    .unwrap();
    move_task(
        &board.ctx,
        task.id,
        MoveTarget {
            status_id: Some(board.done.id),
            position: 0,
        },
    )
    .await
    .unwrap();

    // When
    let result = delete_status(&board.ctx, board.doing.id).await;

    // Then
    assert_that!(result, ok(anything()));
    let remaining: Vec<Uuid> = list_statuses(&board.ctx)
        .await
        .unwrap()
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(remaining, vec![board.todo.id, board.done.id]);
}
