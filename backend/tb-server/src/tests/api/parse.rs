use crate::ApiError;
use crate::api::parse::{deserialize_some, parse_patch_uuid, parse_uuid};

use googletest::prelude::*;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
struct Patch {
    #[serde(default, deserialize_with = "deserialize_some")]
    epic_id: Option<Option<String>>,
}

#[test]
fn given_absent_null_and_value_when_patch_parsed_then_three_outcomes_kept_apart() {
    // Given
    let id = Uuid::new_v4();
    let absent: Patch = serde_json::from_str("{}").unwrap();
    let cleared: Patch = serde_json::from_str(r#"{"epic_id": null}"#).unwrap();
    let set: Patch = serde_json::from_str(&format!(r#"{{"epic_id": "{id}"}}"#)).unwrap();

    // When
    let absent = parse_patch_uuid(absent.epic_id, "epic_id").unwrap();
    let cleared = parse_patch_uuid(cleared.epic_id, "epic_id").unwrap();
    let set = parse_patch_uuid(set.epic_id, "epic_id").unwrap();

    // Then
    assert_that!(absent, none());
    assert_that!(cleared, some(none()));
    assert_that!(set, some(some(eq(id))));
}

#[test]
fn given_garbage_id_when_parsed_then_validation_error_names_field() {
    let result = parse_uuid("42", "sprint_id");

    assert!(matches!(
        result,
        Err(ApiError::Validation { field: Some(ref f), .. }) if f == "sprint_id"
    ));
}
