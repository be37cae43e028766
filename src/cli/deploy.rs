use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};

use crate::config::Config;
use crate::deploy::DeployRequest;

/// Deploy a PyCascading job to a Hadoop server
///
/// The main script and additional files are bundled into the job jar on the
/// server. Files given with -f are copied next to them but kept out of the jar.
#[derive(Parser, Debug)]
#[command(
    name = "remote-deploy",
    version,
    disable_help_flag = true,
    styles = super::styles(),
    after_help = "EXIT STATUS:\n  \
                  1  help requested or bad options\n  \
                  2  build failed\n  \
                  3  no main script and no -b\n\n\
                  Copy-only file names cannot start with a dot.\n\
                  -o and -O values are split on whitespace. Options whose values contain\n\
                  spaces go in deploy.ssh_options or deploy.hadoop_options in the\n\
                  configuration file, one list item each."
)]
pub struct DeployArgs {
    /// Show this message
    #[arg(short = 'h', long = "help", action = ArgAction::SetTrue)]
    pub help: bool,

    /// Build the PyCascading master jar and deploy it before the job
    #[arg(short = 'b')]
    pub build: bool,

    /// Copy FILE to the server with the job, outside the job jar (repeatable)
    #[arg(short = 'f', value_name = "FILE", action = ArgAction::Append)]
    pub copy_only: Vec<PathBuf>,

    /// Server to deploy to, overriding the configured one
    #[arg(short = 's', value_name = "SERVER")]
    pub server: Option<String>,

    /// Extra ssh options, e.g. "-i ~/.ssh/hadoop -p 2222" (repeatable)
    #[arg(short = 'o', value_name = "OPTIONS", action = ArgAction::Append, allow_hyphen_values = true)]
    pub ssh_options: Vec<String>,

    /// Extra options for `hadoop jar`, e.g. "-Dmapred.reduce.tasks=4" (repeatable)
    #[arg(short = 'O', value_name = "OPTIONS", action = ArgAction::Append, allow_hyphen_values = true)]
    pub hadoop_options: Vec<String>,

    /// Run the job right after it is installed
    #[arg(short = 'r')]
    pub run: bool,

    /// Show the commands being run
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Configuration file (defaults to <home>/pycascading.yaml)
    #[arg(long, env = "PYCASCADING_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// PyCascading home holding build/ and python/pycascading/
    #[arg(long, env = "PYCASCADING_HOME", value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Main script followed by additional files to bundle with it
    #[arg(
        value_name = "MAIN_SCRIPT [FILES]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub files: Vec<PathBuf>,
}

impl DeployArgs {
    pub fn main_script(&self) -> Option<&PathBuf> {
        self.files.first()
    }

    pub fn additional_files(&self) -> &[PathBuf] {
        self.files.get(1..).unwrap_or_default()
    }

    /// Usage text printed for -h and for a missing main script
    pub fn usage() -> String {
        Self::command().render_help().to_string()
    }

    /// Merge the command line over the configured defaults
    pub fn to_request(&self, config: &Config) -> DeployRequest {
        let mut request = DeployRequest::from_config(config);
        request.build_first = self.build;
        request.main_script = self.main_script().cloned();
        request.additional_files = self.additional_files().to_vec();
        request.copy_only.clone_from(&self.copy_only);
        if let Some(server) = &self.server {
            request.server.clone_from(server);
        }
        request.ssh_options.extend(split_options(&self.ssh_options));
        request.hadoop_options.extend(split_options(&self.hadoop_options));
        request.run_now = self.run;
        request
    }
}

fn split_options(values: &[String]) -> impl Iterator<Item = String> + '_ {
    values
        .iter()
        .flat_map(|v| v.split_whitespace())
        .map(str::to_string)
}
