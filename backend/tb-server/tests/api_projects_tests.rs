//! Integration tests for project, membership and status endpoints
mod common;

use crate::common::{TEST_USER, create_project, create_test_app, send};

use axum::http::StatusCode;
use googletest::prelude::*;
use serde_json::json;

#[tokio::test]
async fn given_no_projects_when_listed_then_empty() {
    let app = create_test_app().await;

    let (status, json) = send(&app, "GET", "/api/v1/projects", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["projects"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn given_new_project_when_created_then_listed_with_default_columns() {
    // Given
    let app = create_test_app().await;

    // When
    let (project_id, statuses) = create_project(&app, "WEB").await;

    // Then
    assert_that!(statuses.len(), eq(3));
    let (_, json) = send(&app, "GET", "/api/v1/projects", None).await;
    let projects = json["projects"].as_array().unwrap();
    assert_that!(projects.len(), eq(1));
    assert_eq!(projects[0]["id"], project_id.as_str());
    assert_eq!(projects[0]["key"], "WEB");

    let (_, json) = send(&app, "GET", &format!("/api/v1/projects/{project_id}/members"), None).await;
    assert_eq!(json["members"][0]["user_id"], TEST_USER);
    assert_eq!(json["members"][0]["role"], "admin");
}

#[tokio::test]
async fn given_taken_key_when_project_created_then_409() {
    let app = create_test_app().await;
    create_project(&app, "OPS").await;

    let (status, json) = send(
        &app,
        "POST",
        "/api/v1/projects",
        Some(json!({ "key": "OPS", "name": "Second ops" })),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn given_malformed_project_id_when_read_then_400_on_project_id() {
    let app = create_test_app().await;

    let (status, json) = send(&app, "GET", "/api/v1/projects/not-an-id", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["field"], "project_id");
}

#[tokio::test]
async fn given_unknown_project_when_read_then_404() {
    let app = create_test_app().await;

    let (status, _) = send(
        &app,
        "GET",
        &format!("/api/v1/projects/{}", uuid::Uuid::new_v4()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn given_unknown_role_when_member_added_then_400() {
    let app = create_test_app().await;
    let (project_id, _) = create_project(&app, "HR").await;

    let (status, _) = send(
        &app,
        "POST",
        &format!("/api/v1/projects/{project_id}/members"),
        Some(json!({ "user_id": uuid::Uuid::new_v4().to_string(), "role": "overlord" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn given_occupied_status_when_deleted_then_409() {
    // Given
    let app = create_test_app().await;
    let (project_id, statuses) = create_project(&app, "QA").await;
    common::create_task(&app, &project_id, "keeps the column busy").await;

    // When
    let (status, _) = send(
        &app,
        "DELETE",
        &format!("/api/v1/projects/{project_id}/statuses/{}", statuses[0]),
        None,
    )
    .await;

    // Then
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn given_running_server_when_health_checked_then_database_operational() {
    let app = create_test_app().await;

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"], "operational");
}
