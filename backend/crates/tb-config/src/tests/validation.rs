use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err};
use serial_test::serial;

#[test]
#[serial]
fn given_zero_title_length_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _title = EnvGuard::set("TB_VALIDATION_MAX_TITLE_LENGTH", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_story_points_over_max_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _points = EnvGuard::set("TB_VALIDATION_MAX_STORY_POINTS", "5000");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_non_positive_hours_limit_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _hours = EnvGuard::set("TB_VALIDATION_MAX_HOURS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}
