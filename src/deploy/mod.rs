//! Remote deployment of PyCascading jobs
//!
//! A deployment runs these steps in order, aborting at the first error:
//! 1. create the local bundle directory
//! 2. with `-b`, build the master jar and link it into the bundle
//! 3. link the main script, additional files and copy-only files
//! 4. write `setup.sh` (and `run.sh` when there is a main script)
//! 5. stream the bundle to the server and run `setup.sh` there
//! 6. remove the local bundle
//!
//! The bundle is owned by a [`Bundle`], so it is removed on every exit
//! path, including a failed build.

pub mod build;
pub mod bundle;
pub mod scripts;
pub mod transfer;

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{LaunchError, Result};
use crate::ui::Reporter;

pub use bundle::Bundle;
pub use transfer::{TransferOutcome, Transport, Unchecked};

/// One invocation of the deployer, after option parsing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployRequest {
    /// Build and ship the master jar first
    pub build_first: bool,
    pub main_script: Option<PathBuf>,
    /// Bundled into the job jar next to the main script
    pub additional_files: Vec<PathBuf>,
    /// Shipped next to the sources but kept out of the job jar
    pub copy_only: Vec<PathBuf>,
    pub server: String,
    pub ssh_options: Vec<String>,
    pub hadoop_options: Vec<String>,
    /// Start the job right after installing it
    pub run_now: bool,
}

impl DeployRequest {
    /// Request with the configured server and options; the caller adds inputs
    pub fn from_config(config: &Config) -> Self {
        Self {
            server: config.deploy.server.clone(),
            ssh_options: config.deploy.ssh_options.clone(),
            hadoop_options: config.deploy.hadoop_options.clone(),
            ..Self::default()
        }
    }
}

/// Build, package and ship one deployment
pub fn deploy(
    request: &DeployRequest,
    config: &Config,
    reporter: &mut dyn Reporter,
) -> Result<TransferOutcome> {
    let bundle = prepare(request, config, reporter)?;

    reporter.step(&format!("Deploying to {}", request.server));
    let transport = Transport {
        ssh: &config.deploy.ssh,
        ssh_options: &request.ssh_options,
        server: &request.server,
        tar: &config.deploy.tar,
    };
    let outcome = transfer::send(bundle.root(), &transport, reporter);

    let root = bundle.root().display().to_string();
    if let Err(e) = bundle.close() {
        reporter.warn(&format!("could not remove {root}: {e}"));
    }

    let outcome = outcome?;
    reporter.detail(&format!("archive: {}", outcome.archive.peek()));
    reporter.detail(&format!("remote setup: {}", outcome.remote.peek()));
    Ok(outcome)
}

/// Steps 1 to 4: produce a bundle ready for transfer
pub fn prepare(
    request: &DeployRequest,
    config: &Config,
    reporter: &mut dyn Reporter,
) -> Result<Bundle> {
    if request.main_script.is_none() && !request.build_first {
        return Err(LaunchError::MissingMainScript);
    }

    let bundle = Bundle::create()?;
    reporter.detail(&format!("bundle directory {}", bundle.root().display()));

    if request.build_first {
        build::run_build(config, reporter)?;
        bundle.stage_build_artifacts(&config.master_jar(), &config.bootstrap_script())?;
    }

    if let Some(main_script) = &request.main_script {
        reporter.step("Packaging job sources");
        for file in request.copy_only.iter().filter(|f| bundle::is_hidden_name(f)) {
            reporter.warn(&format!(
                "{} starts with a dot and will not be moved next to the sources",
                file.display()
            ));
        }
        bundle.stage_inputs(main_script, &request.additional_files, &request.copy_only)?;

        let main_name = main_script
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        bundle.write_script(
            bundle::RUN_SCRIPT,
            &scripts::run_script(&scripts::RunParams {
                main_script: &main_name,
                cache_dir: &config.deploy.cache_dir,
                hadoop_options: &request.hadoop_options,
            }),
        )?;
    }

    bundle.write_script(
        bundle::SETUP_SCRIPT,
        &scripts::setup_script(&scripts::SetupParams {
            server: &request.server,
            build_dir: &config.deploy.build_dir,
            deploys_dir: &config.deploy.deploys_dir,
            run_now: request.run_now,
        }),
    )?;

    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::SilentReporter;

    #[test]
    fn test_nothing_to_deploy() {
        let mut reporter = SilentReporter::default();
        let request = DeployRequest::from_config(&Config::default());
        let err = prepare(&request, &Config::default(), &mut reporter).unwrap_err();
        assert!(matches!(err, LaunchError::MissingMainScript));
    }

    #[test]
    fn test_request_defaults_from_config() {
        let mut config = Config::default();
        config.deploy.server = "gw".to_string();
        config.deploy.ssh_options = vec!["-p".to_string(), "2222".to_string()];
        let request = DeployRequest::from_config(&config);
        assert_eq!(request.server, "gw");
        assert_eq!(request.ssh_options, ["-p", "2222"]);
        assert!(request.main_script.is_none());
    }
}
