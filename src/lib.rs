//! PyCascading launchers
//!
//! Library behind two binaries:
//! - `local-run` assembles a classpath from local Jython, Cascading and
//!   Hadoop installations and runs a PyCascading script in local mode
//! - `remote-deploy` bundles a script with its files, ships the bundle to a
//!   Hadoop server over ssh and installs it there as a ready-to-run job

pub mod classpath;
pub mod cli;
pub mod commands;
pub mod config;
pub mod deploy;
pub mod error;
pub mod exit;
pub mod local;
pub mod shell;
pub mod temp;
pub mod ui;
