//! Configuration errors

use std::fmt::Display;
use std::path::Path;

use super::LauncherError;

pub fn not_found(path: &Path) -> LauncherError {
    LauncherError::ConfigNotFound {
        path: path.display().to_string(),
    }
}

pub fn read_failed(path: &Path, err: &std::io::Error) -> LauncherError {
    LauncherError::ConfigReadFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// Parse failure of the file at `path`; `reason` is the YAML error
pub fn parse_failed(path: &Path, reason: impl Into<String>) -> LauncherError {
    LauncherError::ConfigParseFailed {
        path: path.display().to_string(),
        reason: reason.into(),
    }
}

/// A required field was set to an empty string or path
pub fn empty_field(field: &str) -> LauncherError {
    invalid(format!("{field} must not be empty"))
}

/// `python_requires` is not a semver requirement
pub fn bad_requirement(requirement: &str, reason: impl Display) -> LauncherError {
    invalid(format!(
        "python_requires '{requirement}' is not a valid version requirement: {reason}"
    ))
}

/// An entry of `stale_patterns` is not a valid glob
pub fn bad_stale_pattern(pattern: &str, reason: impl Display) -> LauncherError {
    invalid(format!("invalid stale pattern '{pattern}': {reason}"))
}

fn invalid(message: String) -> LauncherError {
    LauncherError::ConfigInvalid { message }
}
