//! Bundle preparation tests through the library API

mod common;

use std::path::PathBuf;

use common::TestWorkspace;
use pycascading_launch::config::Config;
use pycascading_launch::deploy::bundle::{OTHER_DIR, RUN_SCRIPT, SETUP_SCRIPT, SOURCES_DIR};
use pycascading_launch::deploy::{DeployRequest, prepare};
use pycascading_launch::error::LaunchError;
use pycascading_launch::ui::SilentReporter;

fn request_for(main: PathBuf) -> DeployRequest {
    DeployRequest {
        main_script: Some(main),
        ..DeployRequest::from_config(&Config::default())
    }
}

#[test]
fn test_sources_only() {
    let workspace = TestWorkspace::new();
    let job = workspace.write_file("job.py", "");
    let a = workspace.write_file("a.py", "");
    let b = workspace.write_file("b.py", "");

    let mut request = request_for(job);
    request.additional_files = vec![a, b];
    let mut reporter = SilentReporter::default();
    let bundle = prepare(&request, &Config::default(), &mut reporter).unwrap();

    assert_eq!(bundle.entries(SOURCES_DIR).unwrap(), ["a.py", "b.py", "job.py"]);
    assert!(bundle.entries(OTHER_DIR).unwrap().is_empty());
    assert!(bundle.root().join(SETUP_SCRIPT).is_file());
    assert!(bundle.root().join(RUN_SCRIPT).is_file());
    assert!(reporter.warnings.is_empty());
}

#[test]
fn test_copy_only_stays_out_of_sources() {
    let workspace = TestWorkspace::new();
    let job = workspace.write_file("job.py", "");
    let extra = workspace.write_file("extra.txt", "");

    let mut request = request_for(job);
    request.copy_only = vec![extra];
    let mut reporter = SilentReporter::default();
    let bundle = prepare(&request, &Config::default(), &mut reporter).unwrap();

    assert_eq!(bundle.entries(SOURCES_DIR).unwrap(), ["job.py"]);
    assert_eq!(bundle.entries(OTHER_DIR).unwrap(), ["extra.txt"]);
}

#[test]
fn test_staged_link_reads_through() {
    let workspace = TestWorkspace::new();
    let job = workspace.write_file("jobs/job.py", "content");

    let mut reporter = SilentReporter::default();
    let bundle = prepare(&request_for(job), &Config::default(), &mut reporter).unwrap();

    let staged = bundle.root().join(SOURCES_DIR).join("job.py");
    assert_eq!(std::fs::read_to_string(staged).unwrap(), "content");
}

#[test]
fn test_dotfile_copy_only_warns() {
    let workspace = TestWorkspace::new();
    let job = workspace.write_file("job.py", "");
    let hidden = workspace.write_file(".settings", "");

    let mut request = request_for(job);
    request.copy_only = vec![hidden];
    let mut reporter = SilentReporter::default();
    let bundle = prepare(&request, &Config::default(), &mut reporter).unwrap();

    assert_eq!(bundle.entries(OTHER_DIR).unwrap(), [".settings"]);
    assert_eq!(reporter.warnings.len(), 1);
    assert!(reporter.warnings[0].contains(".settings"));
}

#[test]
fn test_run_script_names_the_main_script() {
    let workspace = TestWorkspace::new();
    let job = workspace.write_file("scripts/word_count.py", "");

    let mut request = request_for(job);
    request.hadoop_options = vec!["-Dmapred.reduce.tasks=2".to_string()];
    let mut reporter = SilentReporter::default();
    let bundle = prepare(&request, &Config::default(), &mut reporter).unwrap();

    let run = std::fs::read_to_string(bundle.root().join(RUN_SCRIPT)).unwrap();
    assert!(run.contains(
        "hadoop jar ../deploy.jar -Dmapred.reduce.tasks=2 ../bootstrap.py hadoop word_count.py \"$@\""
    ));
}

#[test]
fn test_setup_script_uses_configured_remote_dirs() {
    let workspace = TestWorkspace::new();
    let job = workspace.write_file("job.py", "");
    let config = Config::from_yaml(
        "deploy:\n  build_dir: '$HOME/pc/master'\n  deploys_dir: '/data/$USER/deploys'\n",
    )
    .unwrap();

    let mut reporter = SilentReporter::default();
    let bundle = prepare(&request_for(job), &config, &mut reporter).unwrap();

    let setup = std::fs::read_to_string(bundle.root().join(SETUP_SCRIPT)).unwrap();
    assert!(setup.contains("build_dir=\"$HOME/pc/master\""));
    assert!(setup.contains("deploys_dir=\"/data/$USER/deploys\""));
}

#[cfg(unix)]
#[test]
fn test_build_only_has_no_sources() {
    let workspace = TestWorkspace::new();
    let home = workspace.create_pycascading_home();
    let config = Config::from_yaml(&format!(
        "home: {}\nbuild:\n  tool: 'true'\n",
        home.display()
    ))
    .unwrap();

    let request = DeployRequest {
        build_first: true,
        ..DeployRequest::from_config(&config)
    };
    let mut reporter = SilentReporter::default();
    let bundle = prepare(&request, &config, &mut reporter).unwrap();

    let mut entries = TestWorkspace::entries(bundle.root());
    entries.sort();
    assert_eq!(entries, ["bootstrap.py", "pycascading.jar", "setup.sh"]);
}

#[cfg(unix)]
#[test]
fn test_failed_build_stages_nothing() {
    let workspace = TestWorkspace::new();
    let home = workspace.create_pycascading_home();
    let job = workspace.write_file("job.py", "");
    let config = Config::from_yaml(&format!(
        "home: {}\nbuild:\n  tool: 'false'\n",
        home.display()
    ))
    .unwrap();

    let request = DeployRequest {
        build_first: true,
        ..request_for(job)
    };
    let mut reporter = SilentReporter::default();
    let err = prepare(&request, &config, &mut reporter).unwrap_err();
    assert!(matches!(err, LaunchError::BuildFailed { .. }));
}

#[cfg(unix)]
#[test]
fn test_build_without_built_jar() {
    let workspace = TestWorkspace::new();
    let config = Config::from_yaml(&format!(
        "home: {}\nbuild:\n  tool: 'true'\n",
        workspace.path.join("empty-home").display()
    ))
    .unwrap();

    let request = DeployRequest {
        build_first: true,
        ..DeployRequest::from_config(&config)
    };
    let mut reporter = SilentReporter::default();
    let err = prepare(&request, &config, &mut reporter).unwrap_err();
    assert!(matches!(err, LaunchError::FileNotFound { .. }));
}

#[cfg(unix)]
#[test]
fn test_aliased_main_script_matches_run_script() {
    let workspace = TestWorkspace::new();
    let target = workspace.write_file("jobs/word_count_v2.py", "");
    let alias = workspace.path.join("wc.py");
    std::os::unix::fs::symlink(&target, &alias).unwrap();

    let mut reporter = SilentReporter::default();
    let bundle = prepare(&request_for(alias), &Config::default(), &mut reporter).unwrap();

    assert_eq!(bundle.entries(SOURCES_DIR).unwrap(), ["wc.py"]);
    let run = std::fs::read_to_string(bundle.root().join(RUN_SCRIPT)).unwrap();
    assert!(run.contains("../bootstrap.py hadoop wc.py \"$@\""));
}
