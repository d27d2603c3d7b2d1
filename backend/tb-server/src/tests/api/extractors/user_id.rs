use crate::{ApiError, AppState, USER_ID_HEADER, UserId};

use tb_config::Config;

use axum::{body::Body, extract::FromRequestParts, http::Request};
use googletest::prelude::*;
use uuid::Uuid;

async fn create_test_state(default_user_id: Uuid) -> AppState {
    let pool = tb_db::open_in_memory_pool()
        .await
        .expect("Failed to create test pool");
    AppState::new(pool, &Config::default(), default_user_id)
}

async fn extract(state: &AppState, header: Option<&str>) -> Result<UserId, ApiError> {
    let mut builder = Request::builder();
    if let Some(value) = header {
        builder = builder.header(USER_ID_HEADER, value);
    }
    let (mut parts, _body) = builder.body(Body::empty()).unwrap().into_parts();
    UserId::from_request_parts(&mut parts, state).await
}

#[tokio::test]
async fn given_valid_header_when_extracted_then_header_identity_used() {
    // Given
    let state = create_test_state(Uuid::new_v4()).await;
    let caller = Uuid::new_v4();

    // When
    let result = extract(&state, Some(&caller.to_string())).await;

    // Then
    assert_that!(result.unwrap().0, eq(caller));
}

#[tokio::test]
async fn given_no_header_when_extracted_then_default_user_used() {
    let default_user = Uuid::new_v4();
    let state = create_test_state(default_user).await;

    let result = extract(&state, None).await;

    assert_that!(result.unwrap().0, eq(default_user));
}

#[tokio::test]
async fn given_malformed_header_when_extracted_then_validation_error_on_header() {
    // Given
    let state = create_test_state(Uuid::new_v4()).await;

    // When
    let result = extract(&state, Some("not-a-uuid")).await;

    // Then
    match result {
        Err(ApiError::Validation { field, .. }) => {
            assert_that!(field.as_deref(), some(eq(USER_ID_HEADER)));
        }
        Err(other) => panic!("expected a validation error, got {other:?}"),
        Ok(UserId(id)) => panic!("expected a rejection, got {id}"),
    }
}
