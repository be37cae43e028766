//! `local-run` implementation

use crate::cli::LocalArgs;
use crate::config::Config;
use crate::exit::ExitCode;
use crate::local;
use crate::ui::InteractiveReporter;

/// Usage line printed when no script is given
pub const USAGE: &str = "Usage: local-run <main_script.py> [parameters]";

/// Run local-run; returns the process exit code
pub fn run(args: &LocalArgs) -> i32 {
    if args.script_and_parameters.is_empty() {
        println!("{USAGE}");
        println!();
        println!("Runs the PyCascading script locally, with the parameters passed to it.");
        return ExitCode::Usage.code();
    }

    let config = match Config::load(args.config.as_deref(), args.home.as_deref()) {
        Ok(config) => config,
        Err(e) => return super::report_error(&e).code(),
    };

    let mut reporter = InteractiveReporter::new(args.verbose);
    match local::run(&config, &args.script_and_parameters, &mut reporter) {
        Ok(code) => code,
        Err(e) => super::report_error(&e).code(),
    }
}
