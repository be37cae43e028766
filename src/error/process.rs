//! External process errors

use super::LaunchError;

/// Creates a spawn failed error
pub fn spawn_failed(program: impl Into<String>, reason: impl Into<String>) -> LaunchError {
    LaunchError::SpawnFailed {
        program: program.into(),
        reason: reason.into(),
    }
}

/// Creates a build failed error
pub fn build_failed(reason: impl Into<String>) -> LaunchError {
    LaunchError::BuildFailed {
        reason: reason.into(),
    }
}
