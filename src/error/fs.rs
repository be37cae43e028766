//! File system errors

use super::LaunchError;

/// Creates a file not found error
pub fn not_found(path: impl Into<String>) -> LaunchError {
    LaunchError::FileNotFound { path: path.into() }
}

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> LaunchError {
    LaunchError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a link failed error
pub fn link_failed(path: impl Into<String>, reason: impl Into<String>) -> LaunchError {
    LaunchError::LinkFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a duplicate bundle entry error
pub fn duplicate_entry(name: impl Into<String>, subtree: impl Into<String>) -> LaunchError {
    LaunchError::DuplicateBundleEntry {
        name: name.into(),
        subtree: subtree.into(),
    }
}
