//! Command implementations for the two launcher binaries
//!
//! Each `run` returns the process exit code; errors are printed here so the
//! binaries only have to hand the code back to the OS.

pub mod deploy;
pub mod local;

use crate::error::LaunchError;
use crate::exit::ExitCode;

fn report_error(err: &LaunchError) -> ExitCode {
    eprintln!("Error: {err}");
    err.exit_code()
}
