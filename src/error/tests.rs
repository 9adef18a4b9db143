//! Error type tests
//!
//! Tests for LauncherError enum and its conversions.

#![allow(clippy::expect_used)]

use crate::error::LauncherError;
use std::path::Path;

use crate::error::config::{
    bad_requirement, bad_stale_pattern, empty_field, not_found as config_not_found,
    parse_failed as config_parse_failed, read_failed as config_read_failed,
};
use crate::error::fs::{io_error, remove_failed};
use crate::error::launch::{
    database_inaccessible, install_failed, interpreter_not_found, manifest_not_found,
    root_not_found, spawn_failed,
};
use miette::Diagnostic;

macro_rules! test_error_contains {
    ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
        #[test]
        fn $test_name() {
            let err = $err;
            let error_string = err.to_string();
            $(
                assert!(error_string.contains($contains),
                    "Error message should contain '{}', got: {}",
                    $contains,
                    error_string
                );
            )+
        }
    };
}

#[test]
fn test_error_display() {
    let err = root_not_found("C:/GymTracker");
    assert_eq!(err.to_string(), "Application root not found: C:/GymTracker");
}

#[test]
fn test_error_code() {
    let err = interpreter_not_found("python", "https://www.python.org/downloads/");
    assert_eq!(
        err.code()
            .map(|c: Box<dyn std::fmt::Display>| c.to_string()),
        Some("pylaunch::env::interpreter_not_found".to_string())
    );
}

#[test]
fn test_interpreter_not_found_help_contains_download_url() {
    let err = interpreter_not_found("python", "https://www.python.org/downloads/");
    let help = err.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("https://www.python.org/downloads/"), "{help}");
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: LauncherError = io_err.into();
    assert!(matches!(err, LauncherError::IoError { .. }));
}

#[test]
fn test_yaml_error_conversion() {
    let yaml_str = "invalid: yaml: content: [unclosed";
    let parse_result: std::result::Result<serde_yaml::Value, _> = serde_yaml::from_str(yaml_str);
    let yaml_err = parse_result.expect_err("YAML parsing should have failed");
    let err: LauncherError = yaml_err.into();
    assert!(matches!(err, LauncherError::ConfigParseFailed { .. }));
}

test_error_contains!(
    test_install_failed_with_code,
    install_failed("requirements.txt", Some(2)),
    "requirements.txt",
    "exit 2"
);

test_error_contains!(
    test_install_failed_without_code,
    install_failed("requirements.txt", None),
    "exit none"
);

test_error_contains!(
    test_manifest_not_found,
    manifest_not_found("requirements.txt"),
    "Dependency manifest not found"
);

test_error_contains!(
    test_spawn_failed,
    spawn_failed("python", "permission denied"),
    "Failed to start 'python'",
    "permission denied"
);

test_error_contains!(
    test_database_inaccessible,
    database_inaccessible("gym_tracker.db", "locked"),
    "not accessible"
);

test_error_contains!(
    test_check_failed,
    LauncherError::CheckFailed { failed: 2 },
    "2 environment check(s) failed"
);

#[test]
fn test_config_not_found() {
    let err = config_not_found(Path::new("/path/to/pylaunch.yaml"));
    assert!(matches!(err, LauncherError::ConfigNotFound { .. }));
    assert!(err.to_string().contains("Configuration file not found"));
}

#[test]
fn test_config_parse_failed() {
    let err = config_parse_failed(Path::new("/path/to/pylaunch.yaml"), "invalid YAML");
    assert!(matches!(err, LauncherError::ConfigParseFailed { .. }));
    assert!(
        err.to_string()
            .contains("Failed to parse configuration file")
    );
}

#[test]
fn test_config_invalid() {
    let err = empty_field("interpreter");
    assert!(matches!(err, LauncherError::ConfigInvalid { .. }));
    assert_eq!(
        err.to_string(),
        "Invalid configuration: interpreter must not be empty"
    );
}

test_error_contains!(
    test_bad_requirement_names_value,
    bad_requirement("three", "unexpected character"),
    "python_requires 'three'",
    "unexpected character"
);

test_error_contains!(
    test_bad_stale_pattern_names_pattern,
    bad_stale_pattern("{test_*.db", "unclosed alternative"),
    "invalid stale pattern '{test_*.db'"
);

#[test]
fn test_config_read_failed() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied");
    let err = config_read_failed(Path::new("/path/to/pylaunch.yaml"), &io_err);
    assert!(matches!(err, LauncherError::ConfigReadFailed { .. }));
    assert!(
        err.to_string()
            .contains("Failed to read configuration file")
    );
}

#[test]
fn test_file_errors() {
    let err = remove_failed("test_1.db", "locked");
    assert!(matches!(err, LauncherError::FileRemoveFailed { .. }));
    assert_eq!(err.to_string(), "Failed to remove test_1.db: locked");

    let err = io_error("some error");
    assert!(err.to_string().contains("IO error"));
}

#[test]
fn test_json_error_is_an_encode_failure() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").expect_err("truncated JSON");
    let err: LauncherError = json_err.into();
    assert!(matches!(
        err,
        LauncherError::OutputEncodeFailed { ref format, .. } if format == "JSON"
    ));
    assert!(err.to_string().starts_with("Failed to encode JSON output"));
    assert_eq!(
        err.code().map(|c| c.to_string()),
        Some("pylaunch::output::encode_failed".to_string())
    );
}
