//! Scripts generated for the remote host
//!
//! Remote directories are embedded as [`RemoteDir`] templates inside double
//! quotes, so `$HOME` and friends are resolved by the remote shell when the
//! script runs. Everything that must stay literal (server name, script name,
//! Hadoop options) goes through [`shell::quote`].

use std::fmt::Write;

use crate::deploy::bundle::{
    BOOTSTRAP_NAME, MASTER_JAR_NAME, OTHER_DIR, RUN_SCRIPT, SOURCES_DIR,
};
use crate::shell::{self, RemoteDir};

/// Name of the per-job jar inside a deploy directory
pub const DEPLOY_JAR: &str = "deploy.jar";

/// Template for deploy directory names under the deploys dir
const DEPLOY_DIR_TEMPLATE: &str = "deploy-XXXXXX";

/// Values baked into `setup.sh`
#[derive(Debug, Clone)]
pub struct SetupParams<'a> {
    pub server: &'a str,
    pub build_dir: &'a RemoteDir,
    pub deploys_dir: &'a RemoteDir,
    /// Start the job as soon as it is installed
    pub run_now: bool,
}

/// Values baked into `run.sh`
#[derive(Debug, Clone)]
pub struct RunParams<'a> {
    /// File name of the main script inside `sources/`
    pub main_script: &'a str,
    pub cache_dir: &'a RemoteDir,
    pub hadoop_options: &'a [String],
}

/// Render `setup.sh`, executed inside the extracted bundle on the server
pub fn setup_script(params: &SetupParams<'_>) -> String {
    let mut s = String::new();
    let _ = writeln!(s, "#!/bin/sh");
    let _ = writeln!(s, "# Installs a PyCascading bundle; runs inside the extracted bundle.");
    let _ = writeln!(s, "server={}", shell::quote(params.server));
    let _ = writeln!(s, "build_dir={}", params.build_dir.shell_word());
    let _ = writeln!(s, "deploys_dir={}", params.deploys_dir.shell_word());
    s.push('\n');

    let _ = writeln!(
        s,
        "if [ -e {MASTER_JAR_NAME} ] && [ -e {BOOTSTRAP_NAME} ]; then"
    );
    let _ = writeln!(s, "    mkdir -p \"$build_dir\"");
    let _ = writeln!(
        s,
        "    mv {MASTER_JAR_NAME} {BOOTSTRAP_NAME} \"$build_dir\""
    );
    let _ = writeln!(s, "    echo \"Installed the PyCascading master jar in $build_dir\"");
    let _ = writeln!(s, "fi");
    s.push('\n');

    let _ = writeln!(s, "if [ -d {SOURCES_DIR} ]; then");
    let _ = writeln!(s, "    mkdir -p \"$deploys_dir\"");
    let _ = writeln!(
        s,
        "    deploy_dir=$(mktemp -d \"$deploys_dir/{DEPLOY_DIR_TEMPLATE}\") || exit 1"
    );
    let _ = writeln!(
        s,
        "    mv {RUN_SCRIPT} {SOURCES_DIR} {OTHER_DIR} \"$deploy_dir\""
    );
    let _ = writeln!(s, "    cd \"$deploy_dir\" || exit 1");
    let _ = writeln!(s, "    if [ -e \"$build_dir/{MASTER_JAR_NAME}\" ]; then");
    let _ = writeln!(
        s,
        "        cp \"$build_dir/{MASTER_JAR_NAME}\" {DEPLOY_JAR}"
    );
    let _ = writeln!(s, "        cp \"$build_dir/{BOOTSTRAP_NAME}\" .");
    let _ = writeln!(s, "        jar uf {DEPLOY_JAR} -C {SOURCES_DIR} .");
    let _ = writeln!(s, "        mv {OTHER_DIR}/* {SOURCES_DIR} 2>/dev/null");
    let _ = writeln!(s, "        rmdir {OTHER_DIR} 2>/dev/null");
    let _ = writeln!(s, "        echo \"Run the job on $server with:\"");
    let _ = writeln!(s, "        echo \"   $deploy_dir/{RUN_SCRIPT} [parameters]\"");
    if params.run_now {
        let _ = writeln!(s, "        \"$deploy_dir/{RUN_SCRIPT}\"");
    }
    let _ = writeln!(s, "    else");
    let _ = writeln!(
        s,
        "        echo \"No PyCascading master jar in $build_dir.\""
    );
    let _ = writeln!(
        s,
        "        echo \"Deploy it first with remote-deploy -b, then deploy the job again.\""
    );
    let _ = writeln!(s, "        exit 1");
    let _ = writeln!(s, "    fi");
    let _ = writeln!(s, "fi");
    s
}

/// Render `run.sh`, which submits the job from its deploy directory
pub fn run_script(params: &RunParams<'_>) -> String {
    let opts = format!(
        "$HADOOP_OPTS -Dpython.cachedir={} -Dpython.cachedir.skip=false",
        params.cache_dir.template()
    );

    let mut command = format!("exec hadoop jar ../{DEPLOY_JAR}");
    for option in params.hadoop_options {
        command.push(' ');
        command.push_str(&shell::quote(option));
    }
    let _ = write!(
        command,
        " ../{BOOTSTRAP_NAME} hadoop {} \"$@\"",
        shell::quote(params.main_script)
    );

    let mut s = String::new();
    let _ = writeln!(s, "#!/bin/sh");
    let _ = writeln!(s, "# Submits the job to Hadoop; arguments are passed to the script.");
    let _ = writeln!(s, "cd \"$(dirname \"$0\")/{SOURCES_DIR}\" || exit 1");
    let _ = writeln!(s, "HADOOP_OPTS={}", shell::quote_expanding(&opts));
    let _ = writeln!(s, "export HADOOP_OPTS");
    let _ = writeln!(s, "{command}");
    s
}
