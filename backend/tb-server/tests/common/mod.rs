#![allow(dead_code)]

//! Test infrastructure for tb-server API tests

use tb_config::Config;
use tb_server::{AppState, build_router};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_USER: &str = "00000000-0000-0000-0000-000000000001";

/// In-memory database with the schema applied
pub async fn create_test_pool() -> SqlitePool {
    let pool = tb_db::open_in_memory_pool()
        .await
        .expect("Failed to create test database");
    tb_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

pub async fn create_test_app_state() -> AppState {
    let user_id = Uuid::parse_str(TEST_USER).expect("valid test user id");
    AppState::new(create_test_pool().await, &Config::default(), user_id)
}

pub async fn create_test_app() -> Router {
    build_router(create_test_app_state().await, 64)
}

/// Sends one request and decodes the JSON response body.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

/// Creates a project and returns its id with the ids of its three default
/// statuses in column order.
pub async fn create_project(app: &Router, key: &str) -> (String, Vec<String>) {
    let (status, json) = send(
        app,
        "POST",
        "/api/v1/projects",
        Some(serde_json::json!({ "key": key, "name": format!("{key} board") })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    let project_id = json["project"]["id"].as_str().unwrap().to_string();

    let (_, json) = send(app, "GET", &format!("/api/v1/projects/{project_id}/statuses"), None).await;
    let statuses = json["statuses"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect();

    (project_id, statuses)
}

pub async fn create_task(app: &Router, project_id: &str, title: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        &format!("/api/v1/projects/{project_id}/tasks"),
        Some(serde_json::json!({ "title": title })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{json}");
    json["task"].clone()
}
