//! Environment probing and process errors

use super::LauncherError;

/// Creates a root not found error
pub fn root_not_found(path: impl Into<String>) -> LauncherError {
    LauncherError::RootNotFound { path: path.into() }
}

/// Creates an interpreter not found error carrying the download link
pub fn interpreter_not_found(
    interpreter: impl Into<String>,
    download_url: impl Into<String>,
) -> LauncherError {
    LauncherError::InterpreterNotFound {
        interpreter: interpreter.into(),
        download_url: download_url.into(),
    }
}

/// Creates a dependency install failed error
///
/// `code` is `None` when the installer was terminated without an exit code.
pub fn install_failed(manifest: impl Into<String>, code: Option<i32>) -> LauncherError {
    LauncherError::DependencyInstallFailed {
        manifest: manifest.into(),
        code: code.map_or_else(|| "none".to_string(), |c| c.to_string()),
    }
}

/// Creates a manifest not found error
pub fn manifest_not_found(path: impl Into<String>) -> LauncherError {
    LauncherError::ManifestNotFound { path: path.into() }
}

/// Creates a spawn failed error
pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> LauncherError {
    LauncherError::SpawnFailed {
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates a database inaccessible error
pub fn database_inaccessible(path: impl Into<String>, reason: impl Into<String>) -> LauncherError {
    LauncherError::DatabaseInaccessible {
        path: path.into(),
        reason: reason.into(),
    }
}
