use crate::Config;
use crate::tests::{EnvGuard, setup_config_dir};

use googletest::prelude::*;
use serial_test::serial;
use uuid::Uuid;

#[test]
#[serial]
fn given_privileged_port_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("TB_SERVER_PORT", "80");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_port_zero_when_validate_then_ok() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _port = EnvGuard::set("TB_SERVER_PORT", "0");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, ok(anything()));
}

#[test]
#[serial]
fn given_default_user_when_load_then_parsed_as_uuid() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let user = Uuid::new_v4();
    let _user = EnvGuard::set("TB_SERVER_DEFAULT_USER_ID", &user.to_string());

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.server.default_user().unwrap(), some(eq(user)));
}

#[test]
#[serial]
fn given_malformed_default_user_when_validate_then_error() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _user = EnvGuard::set("TB_SERVER_DEFAULT_USER_ID", "alice");

    // When
    let result = Config::load().unwrap().validate();

    // Then
    assert_that!(result, err(anything()));
}

#[test]
#[serial]
fn given_host_and_port_when_bind_addr_then_joined() {
    // Given
    let (_temp, _guard) = setup_config_dir();
    let _host = EnvGuard::set("TB_SERVER_HOST", "0.0.0.0");
    let _port = EnvGuard::set("TB_SERVER_PORT", "8080");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.bind_addr(), eq("0.0.0.0:8080"));
}
