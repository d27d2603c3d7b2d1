use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::assert_that;
use googletest::prelude::{anything, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_absolute_database_path_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("TB_DATABASE_PATH", "/etc/taskboard.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_parent_traversal_in_database_path_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("TB_DATABASE_PATH", "../escape.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_zero_pool_size_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _pool = EnvGuard::set("TB_DATABASE_MAX_CONNECTIONS", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_nested_relative_path_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _path = EnvGuard::set("TB_DATABASE_PATH", "data/board.db");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}
