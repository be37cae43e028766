//! Configuration errors

use super::LaunchError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> LaunchError {
    LaunchError::ConfigNotFound { path: path.into() }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> LaunchError {
    LaunchError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> LaunchError {
    LaunchError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> LaunchError {
    LaunchError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
