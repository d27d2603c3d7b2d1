use crate::ApiError;
use crate::api::error::RETRY_MESSAGE;

use tb_db::DbError;
use tb_engine::EngineError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use googletest::prelude::*;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn into_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn given_not_found_when_rendered_then_404_without_field() {
    // Given
    let error = ApiError::from(EngineError::not_found("task 42 not found"));

    // When
    let (status, json) = into_json(error).await;

    // Then
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "task 42 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn given_validation_error_when_rendered_then_400_names_field() {
    let error = ApiError::from(EngineError::validation("title cannot be empty", "title"));

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "title");
}

#[tokio::test]
async fn given_invalid_state_and_conflict_when_rendered_then_both_409_with_own_codes() {
    let (invalid_status, invalid) =
        into_json(EngineError::invalid_state("sprint already completed").into()).await;
    let (conflict_status, conflict) =
        into_json(EngineError::conflict("another sprint is active").into()).await;

    assert_eq!(invalid_status, StatusCode::CONFLICT);
    assert_eq!(conflict_status, StatusCode::CONFLICT);
    assert_eq!(invalid["error"]["code"], "INVALID_STATE");
    assert_eq!(conflict["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn given_cycle_when_rendered_then_422_on_to_task_id() {
    // Given
    let a = Uuid::new_v4();
    let b = Uuid::new_v4();
    let error = ApiError::from(EngineError::cycle(vec![a, b, a]));

    // When
    let (status, json) = into_json(error).await;

    // Then
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"]["code"], "CYCLE_DETECTED");
    assert_eq!(json["error"]["field"], "to_task_id");
    let message = json["error"]["message"].as_str().unwrap();
    assert_that!(message, contains_substring(&a.to_string()[..8]));
}

#[tokio::test]
async fn given_lost_write_race_when_rendered_then_503_asks_for_retry() {
    let error = ApiError::from(EngineError::concurrency("project revision moved"));

    let (status, json) = into_json(error).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["code"], "CONCURRENCY_ERROR");
    assert_eq!(json["error"]["message"], RETRY_MESSAGE);
}

#[tokio::test]
async fn given_database_failure_when_rendered_then_500_hides_details() {
    // Given
    let error = ApiError::from(EngineError::Database {
        source: DbError::Initialization {
            message: "unable to open /var/lib/taskboard/board.db".into(),
            location: ErrorLocation::from(Location::caller()),
        },
        location: ErrorLocation::from(Location::caller()),
    });

    // When
    let (status, json) = into_json(error).await;

    // Then
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    let message = json["error"]["message"].as_str().unwrap();
    assert_that!(message, not(contains_substring("/var/lib")));
}

#[tokio::test]
async fn given_timeout_when_rendered_then_503() {
    let (status, json) = into_json(ApiError::unavailable("request timed out")).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"]["message"], "request timed out");
}
