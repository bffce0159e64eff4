use crate::config::{Config, ConfigError, DEFAULT_CORS_ORIGIN, DEFAULT_PORT};
use rstest::rstest;
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: &[&str] = &[
    "TASKDECK_API_PORT",
    "PORT",
    "TASKDECK_API_HOST",
    "TASKDECK_CORS_ORIGIN",
    "CORS_ORIGIN",
    "TASKDECK_HTTP_CONNECT_TIMEOUT_SECS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host.to_string(), "127.0.0.1");
    assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
    assert_eq!(config.http_connect_timeout, Duration::from_secs(10));
}

#[test]
#[serial]
fn test_new_port_variable_wins_over_legacy() {
    clear_env();
    env::set_var("PORT", "8080");
    env::set_var("TASKDECK_API_PORT", "9090");

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 9090);

    env::remove_var("TASKDECK_API_PORT");
    let config = Config::from_env().unwrap();
    assert_eq!(config.port, 8080);

    clear_env();
}

#[test]
#[serial]
fn test_config_from_env_with_custom_cors() {
    clear_env();
    env::set_var("CORS_ORIGIN", "https://example.com");

    let config = Config::from_env().unwrap();
    assert_eq!(config.cors_origin, "https://example.com");

    env::set_var("TASKDECK_CORS_ORIGIN", "https://app.example.com");
    let config = Config::from_env().unwrap();
    assert_eq!(config.cors_origin, "https://app.example.com");

    clear_env();
}

#[test]
#[serial]
fn test_config_port_zero() {
    clear_env();
    env::set_var("TASKDECK_API_PORT", "0");

    let result = Config::from_env();
    assert!(matches!(result.unwrap_err(), ConfigError::PortOutOfRange(0)));

    clear_env();
}

#[rstest]
#[case("1", 1)]
#[case("80", 80)]
#[case("8080", 8080)]
#[case("65535", 65535)]
#[serial]
fn test_valid_port_numbers(#[case] port_str: &str, #[case] expected: u16) {
    clear_env();
    env::set_var("TASKDECK_API_PORT", port_str);

    let config = Config::from_env().unwrap();
    assert_eq!(config.port, expected);

    clear_env();
}

#[rstest]
#[case("-1")]
#[case("65536")]
#[case("1.5")]
#[case("not-a-number")]
#[serial]
fn test_invalid_port_formats(#[case] port_str: &str) {
    clear_env();
    env::set_var("TASKDECK_API_PORT", port_str);

    let result = Config::from_env();
    assert!(matches!(result.unwrap_err(), ConfigError::InvalidPort(_)));

    clear_env();
}

#[test]
#[serial]
fn test_invalid_host() {
    clear_env();
    env::set_var("TASKDECK_API_HOST", "localhost:80");

    let result = Config::from_env();
    assert!(matches!(result.unwrap_err(), ConfigError::InvalidHost(_)));

    clear_env();
}

#[rstest]
#[case("0")]
#[case("ten")]
#[serial]
fn test_invalid_connect_timeout(#[case] value: &str) {
    clear_env();
    env::set_var("TASKDECK_HTTP_CONNECT_TIMEOUT_SECS", value);

    let result = Config::from_env();
    assert!(matches!(result.unwrap_err(), ConfigError::InvalidTimeout(v) if v == value));

    clear_env();
}

#[test]
fn test_config_error_display() {
    let error = ConfigError::PortOutOfRange(0);
    assert_eq!(error.to_string(), "Port 0 is out of valid range (1-65535)");

    let parse_error = "123abc".parse::<u16>().unwrap_err();
    let error = ConfigError::InvalidPort(parse_error);
    assert!(error.to_string().contains("Invalid port number"));
}
