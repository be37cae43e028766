use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

/// Run a PyCascading script locally
///
/// Puts the Jython, Cascading and Hadoop jars configured in pycascading.yaml
/// on the classpath and runs the script through the PyCascading bootstrap in
/// local mode.
#[derive(Parser, Debug)]
#[command(
    name = "local-run",
    version,
    styles = super::styles(),
    after_help = "EXAMPLES:\n  \
                  Run a job:\n    local-run word_count.py input.txt output\n\n\
                  Use another configuration:\n    local-run --config ~/pc.yaml job.py"
)]
pub struct LocalArgs {
    /// Configuration file (defaults to <home>/pycascading.yaml)
    #[arg(long, env = "PYCASCADING_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// PyCascading home holding build/ and python/pycascading/
    #[arg(long, env = "PYCASCADING_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Print the assembled classpath
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Main script followed by its parameters
    #[arg(
        value_name = "MAIN_SCRIPT.py [PARAMETERS]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub script_and_parameters: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_and_parameters() {
        let args = LocalArgs::try_parse_from(["local-run", "job.py", "in", "out"]).unwrap();
        assert_eq!(args.script_and_parameters, ["job.py", "in", "out"]);
        assert!(!args.verbose);
    }

    #[test]
    fn test_flags_after_script_belong_to_script() {
        let args = LocalArgs::try_parse_from(["local-run", "-v", "job.py", "-v", "--home", "x"])
            .unwrap();
        assert!(args.verbose);
        assert!(args.home.is_none());
        assert_eq!(args.script_and_parameters, ["job.py", "-v", "--home", "x"]);
    }

    #[test]
    fn test_no_script() {
        let args = LocalArgs::try_parse_from(["local-run"]).unwrap();
        assert!(args.script_and_parameters.is_empty());
    }
}
