use crate::tests::{EnvGuard, setup_config_dir};
use crate::{CONFIG_FILENAME, Config};

use googletest::prelude::*;
use log::LevelFilter;
use serial_test::serial;

#[test]
#[serial]
fn given_no_config_file_when_load_then_defaults_and_valid() {
    // Given
    let (_temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(8000));
    assert_that!(config.database.path, eq("taskboard.db"));
    assert_that!(config.retry.max_attempts, eq(3));
    assert_that!(config.validation.max_title_length, eq(200));
    assert_that!(config.validate(), ok(anything()));
}

#[test]
#[serial]
fn given_missing_config_dir_when_load_then_directory_created() {
    // Given
    let temp = tempfile::TempDir::new().unwrap();
    let nested = temp.path().join("nested").join("taskboard");
    let _guard = EnvGuard::set("TB_CONFIG_DIR", nested.to_str().unwrap());

    // When
    let result = Config::load();

    // Then
    assert_that!(result, ok(anything()));
    assert!(nested.exists());
}

#[test]
#[serial]
fn given_config_file_when_load_then_values_applied() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(
        temp.path().join(CONFIG_FILENAME),
        r#"
            [server]
            port = 9100

            [retry]
            max_attempts = 5

            [logging]
            level = "debug"
        "#,
    )
    .unwrap();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9100));
    assert_that!(config.retry.max_attempts, eq(5));
    assert_that!(*config.logging.level, eq(LevelFilter::Debug));
    assert_that!(config.database.max_connections, eq(5));
}

#[test]
#[serial]
fn given_env_override_when_load_then_env_wins_over_file() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join(CONFIG_FILENAME), "[server]\nport = 9100\n").unwrap();
    let _port = EnvGuard::set("TB_SERVER_PORT", "9200");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.port, eq(9200));
}

#[test]
#[serial]
fn given_malformed_toml_when_load_then_error() {
    // Given
    let (temp, _guard) = setup_config_dir();
    std::fs::write(temp.path().join(CONFIG_FILENAME), "[server\nport = ").unwrap();

    // When
    let result = Config::load();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_unknown_log_level_when_load_then_falls_back_to_info() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _level = EnvGuard::set("TB_LOG_LEVEL", "chatty");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(*config.logging.level, eq(LevelFilter::Info));
}

#[test]
#[serial]
fn given_log_file_with_directory_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _file = EnvGuard::set("TB_LOG_FILE", "logs/taskboard.log");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
#[serial]
fn given_config_dir_when_database_path_requested_then_joined() {
    // Given
    let (temp, _guard) = setup_config_dir();

    // When
    let config = Config::load().unwrap();

    // Then
    assert_eq!(
        config.database_path().unwrap(),
        temp.path().join("taskboard.db")
    );
}
