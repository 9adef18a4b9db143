//! File system errors

use super::LauncherError;

/// Creates a file remove failed error
pub fn remove_failed(path: impl Into<String>, reason: impl Into<String>) -> LauncherError {
    LauncherError::FileRemoveFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
#[cfg(test)]
pub fn io_error(message: impl Into<String>) -> LauncherError {
    LauncherError::IoError {
        message: message.into(),
    }
}
