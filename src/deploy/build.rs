//! Build of the PyCascading master jar before packaging

use std::process::Command;

use crate::config::Config;
use crate::error::{self, Result};
use crate::ui::Reporter;

/// Run `<tool> -f <home>/<file>` and wait for it
///
/// The tool's own output goes straight to the terminal. Any failure,
/// including not being able to start the tool, is a build failure.
pub fn run_build(config: &Config, reporter: &mut dyn Reporter) -> Result<()> {
    let build_file = config.build_file();
    reporter.step("Building the PyCascading master jar");
    reporter.detail(&format!("{} -f {}", config.build.tool, build_file.display()));

    let status = Command::new(&config.build.tool)
        .arg("-f")
        .arg(&build_file)
        .status()
        .map_err(|e| {
            error::process::build_failed(format!("could not start '{}': {e}", config.build.tool))
        })?;

    if !status.success() {
        return Err(error::process::build_failed(format!(
            "{} {status}",
            config.build.tool
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LaunchError;
    use crate::ui::SilentReporter;

    fn config_with_tool(tool: &str) -> Config {
        let mut config = Config::default();
        config.build.tool = tool.to_string();
        config
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_build() {
        let mut reporter = SilentReporter::default();
        assert!(run_build(&config_with_tool("true"), &mut reporter).is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_build() {
        let mut reporter = SilentReporter::default();
        let err = run_build(&config_with_tool("false"), &mut reporter).unwrap_err();
        assert!(matches!(err, LaunchError::BuildFailed { .. }));
        assert!(err.to_string().ends_with("Aborting."));
    }

    #[test]
    fn test_missing_tool_is_build_failure() {
        let mut reporter = SilentReporter::default();
        let err = run_build(
            &config_with_tool("pycascading-no-such-build-tool"),
            &mut reporter,
        )
        .unwrap_err();
        assert!(matches!(err, LaunchError::BuildFailed { .. }));
    }
}
