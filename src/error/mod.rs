//! Error types and handling for the PyCascading launchers
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`classpath`]: Classpath assembly errors
//! - [`fs`]: File system and bundle staging errors
//! - [`process`]: External process errors (build tool, runtime, tar, ssh)

pub mod classpath;
pub mod config;
pub mod fs;
pub mod process;

use miette::Diagnostic;
use thiserror::Error;

use crate::exit::ExitCode;

/// Main error type for launcher operations
#[derive(Error, Diagnostic, Debug)]
pub enum LaunchError {
    // Usage errors
    #[error("No main script given")]
    #[diagnostic(
        code(pycascading::usage::missing_main_script),
        help("Pass the PyCascading script to deploy, or -b to only deploy the master jar")
    )]
    MissingMainScript,

    // Build errors
    #[error("Build was not successful ({reason}). Aborting.")]
    #[diagnostic(
        code(pycascading::build::failed),
        help("Fix the build, or deploy without -b to reuse the master jar already on the server")
    )]
    BuildFailed { reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(pycascading::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(pycascading::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(pycascading::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(pycascading::config::invalid))]
    ConfigInvalid { message: String },

    // Classpath errors
    #[error("No installation root configured for library set '{name}'")]
    #[diagnostic(
        code(pycascading::classpath::root_missing),
        help("Add '{name}' under 'roots' in the configuration file, or set strict_globs: false")
    )]
    LibraryRootMissing { name: String },

    #[error("Pattern '{pattern}' matched no files under {root}")]
    #[diagnostic(
        code(pycascading::classpath::no_matches),
        help("Check the installation root, or set strict_globs: false to skip empty patterns")
    )]
    NoGlobMatches { pattern: String, root: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(pycascading::classpath::invalid_glob))]
    InvalidGlob { pattern: String, reason: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(pycascading::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(pycascading::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to link {path} into the bundle: {reason}")]
    #[diagnostic(code(pycascading::fs::link_failed))]
    LinkFailed { path: String, reason: String },

    #[error("Two files named '{name}' would land in {subtree}/")]
    #[diagnostic(
        code(pycascading::fs::duplicate_entry),
        help("Bundle entries are keyed by file name; rename one of the files")
    )]
    DuplicateBundleEntry { name: String, subtree: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(pycascading::fs::io_error))]
    IoError { message: String },

    // Process errors
    #[error("Failed to start '{program}': {reason}")]
    #[diagnostic(
        code(pycascading::process::spawn_failed),
        help("Check that '{program}' is installed and on PATH")
    )]
    SpawnFailed { program: String, reason: String },
}

impl LaunchError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LaunchError::MissingMainScript => ExitCode::MissingMainScript,
            LaunchError::BuildFailed { .. } => ExitCode::BuildFailed,
            _ => ExitCode::Failure,
        }
    }
}

impl From<std::io::Error> for LaunchError {
    fn from(err: std::io::Error) -> Self {
        LaunchError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for LaunchError {
    fn from(err: serde_yaml::Error) -> Self {
        LaunchError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, LaunchError>;
