//! `remote-deploy` implementation

use crate::cli::DeployArgs;
use crate::config::Config;
use crate::deploy;
use crate::error::LaunchError;
use crate::exit::ExitCode;
use crate::ui::InteractiveReporter;

/// Run remote-deploy; returns the process exit code
pub fn run(args: &DeployArgs) -> ExitCode {
    if args.help {
        println!("{}", DeployArgs::usage());
        return ExitCode::Usage;
    }
    if args.main_script().is_none() && !args.build {
        println!("{}", DeployArgs::usage());
        return LaunchError::MissingMainScript.exit_code();
    }

    let config = match Config::load(args.config.as_deref(), args.home.as_deref()) {
        Ok(config) => config,
        Err(e) => return super::report_error(&e),
    };

    let request = args.to_request(&config);
    let mut reporter = InteractiveReporter::new(args.verbose);
    match deploy::deploy(&request, &config, &mut reporter) {
        // The remote status is not checked: a deployment that reached the
        // server counts as done
        Ok(_) => ExitCode::Success,
        Err(e) => super::report_error(&e),
    }
}
