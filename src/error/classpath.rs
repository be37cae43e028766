//! Classpath assembly errors

use super::LaunchError;

pub fn root_missing(name: impl Into<String>) -> LaunchError {
    LaunchError::LibraryRootMissing { name: name.into() }
}

pub fn no_matches(pattern: impl Into<String>, root: impl Into<String>) -> LaunchError {
    LaunchError::NoGlobMatches {
        pattern: pattern.into(),
        root: root.into(),
    }
}

pub fn invalid_glob(pattern: impl Into<String>, reason: impl Into<String>) -> LaunchError {
    LaunchError::InvalidGlob {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
