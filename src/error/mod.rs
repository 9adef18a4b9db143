//! Error types and handling for pylaunch
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`launch`]: Environment probing and process errors
//! - [`fs`]: File system errors
//! - [`encode`]: Output serialization errors

pub mod config;
pub mod encode;
pub mod fs;
pub mod launch;

#[cfg(test)]
mod tests;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for pylaunch operations
#[derive(Error, Diagnostic, Debug)]
pub enum LauncherError {
    // Environment errors
    #[error("Application root not found: {path}")]
    #[diagnostic(
        code(pylaunch::env::root_not_found),
        help("Pass --root <DIR> or set 'root' in pylaunch.yaml to the application directory")
    )]
    RootNotFound { path: String },

    #[error("Interpreter '{interpreter}' is not installed or not on PATH")]
    #[diagnostic(
        code(pylaunch::env::interpreter_not_found),
        help("Download and install it from {download_url}, then make sure it is added to PATH")
    )]
    InterpreterNotFound {
        interpreter: String,
        download_url: String,
    },

    #[error("Failed to install dependencies from {manifest} (exit {code})")]
    #[diagnostic(
        code(pylaunch::deps::install_failed),
        help("Run the install manually to see the full error, or disable strict_install")
    )]
    DependencyInstallFailed { manifest: String, code: String },

    #[error("Dependency manifest not found: {path}")]
    #[diagnostic(code(pylaunch::deps::manifest_not_found))]
    ManifestNotFound { path: String },

    #[error("Failed to start '{program}': {reason}")]
    #[diagnostic(code(pylaunch::process::spawn_failed))]
    SpawnFailed { program: String, reason: String },

    #[error("{failed} environment check(s) failed")]
    #[diagnostic(
        code(pylaunch::check::failed),
        help("Fix the items marked above and run 'pylaunch check' again")
    )]
    CheckFailed { failed: usize },

    #[error("Database file is not accessible: {path}")]
    #[diagnostic(
        code(pylaunch::clean::database_locked),
        help("Close any running instance of the application, or restart the machine, and try again")
    )]
    DatabaseInaccessible { path: String, reason: String },

    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(pylaunch::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(pylaunch::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(pylaunch::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(pylaunch::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(pylaunch::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to remove {path}: {reason}")]
    #[diagnostic(
        code(pylaunch::fs::remove_failed),
        help("The file is probably held open by a running instance of the application")
    )]
    FileRemoveFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pylaunch::fs::io_error))]
    IoError { message: String },

    // Output errors
    #[error("Failed to encode {format} output: {reason}")]
    #[diagnostic(code(pylaunch::output::encode_failed))]
    OutputEncodeFailed { format: String, reason: String },
}

impl From<std::io::Error> for LauncherError {
    fn from(err: std::io::Error) -> Self {
        LauncherError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for LauncherError {
    fn from(err: serde_yaml::Error) -> Self {
        LauncherError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for LauncherError {
    fn from(err: serde_json::Error) -> Self {
        encode::output_encode_failed("JSON", err.to_string())
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LauncherError>;
