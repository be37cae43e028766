//! Running a PyCascading script locally
//!
//! The runner puts the Jython, Cascading and Hadoop jars on the classpath
//! and starts the Jython interpreter on the PyCascading bootstrap script in
//! `local` mode. The script and its parameters follow the mode token.

use std::ffi::OsString;
use std::process::Command;

use crate::classpath::{self, Classpath};
use crate::config::Config;
use crate::error::{self, Result};
use crate::ui::Reporter;

/// Execution mode token understood by the bootstrap script
pub const LOCAL_MODE: &str = "local";

/// Program and arguments for one local run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<OsString>,
}

impl Invocation {
    /// Arguments for `script_and_parameters` (main script first)
    pub fn new(config: &Config, classpath: &Classpath, script_and_parameters: &[OsString]) -> Self {
        let mut args: Vec<OsString> = config
            .runtime
            .jvm_options
            .iter()
            .map(OsString::from)
            .collect();
        args.push("-classpath".into());
        args.push(classpath.to_string().into());
        args.push(config.runtime.main_class.clone().into());
        args.push(config.bootstrap_script().into_os_string());
        args.push(LOCAL_MODE.into());
        args.extend(script_and_parameters.iter().cloned());

        Self {
            program: config.runtime.java.clone(),
            args,
        }
    }
}

/// Assemble the classpath, start the runtime and wait for it
///
/// Returns the runtime's exit code; a run killed by a signal counts as 1.
pub fn run(
    config: &Config,
    script_and_parameters: &[OsString],
    reporter: &mut dyn Reporter,
) -> Result<i32> {
    let classpath = classpath::assemble(&config.library_sets, &config.roots, config.strict_globs)?;
    if classpath.is_empty() {
        reporter.warn("the classpath is empty; check 'roots' in the configuration");
    }
    reporter.detail(&format!("classpath: {classpath}"));

    let invocation = Invocation::new(config, &classpath, script_and_parameters);
    let status = Command::new(&invocation.program)
        .args(&invocation.args)
        .status()
        .map_err(|e| error::process::spawn_failed(&invocation.program, e.to_string()))?;

    Ok(status.code().unwrap_or(1))
}
