//! Output serialization errors

use super::LauncherError;

/// Creates an output encode failed error
pub fn output_encode_failed(format: impl Into<String>, reason: impl Into<String>) -> LauncherError {
    LauncherError::OutputEncodeFailed {
        format: format.into(),
        reason: reason.into(),
    }
}
