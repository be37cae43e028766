//! Settings for the external programs the launchers drive

use serde::{Deserialize, Serialize};

use crate::shell::RemoteDir;

/// How the scripting runtime is started by the local runner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RuntimeConfig {
    /// JVM launcher
    pub java: String,

    /// Class that starts the Jython interpreter
    pub main_class: String,

    /// Options placed before `-classpath`
    pub jvm_options: Vec<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            java: "java".to_string(),
            main_class: "org.python.util.jython".to_string(),
            jvm_options: Vec::new(),
        }
    }
}

/// Build of the PyCascading master jar (`remote-deploy -b`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Build tool, invoked as `<tool> -f <home>/<file>`
    pub tool: String,

    /// Build descriptor relative to the PyCascading home
    pub file: String,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            tool: "ant".to_string(),
            file: "java/build.xml".to_string(),
        }
    }
}

/// Remote host and directory layout for `remote-deploy`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeployConfig {
    /// Host reached over ssh
    pub server: String,

    /// Where the master jar and bootstrap script persist on the server
    pub build_dir: RemoteDir,

    /// Parent of the per-job deploy directories on the server
    pub deploys_dir: RemoteDir,

    /// Jython cache directory used by submitted jobs
    pub cache_dir: RemoteDir,

    pub ssh: String,

    /// Extra ssh arguments (identity file, port, ...)
    pub ssh_options: Vec<String>,

    /// Extra arguments for `hadoop jar` in the generated run script
    pub hadoop_options: Vec<String>,

    pub tar: String,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            server: "localhost".to_string(),
            build_dir: RemoteDir::new("$HOME/pycascading/build"),
            deploys_dir: RemoteDir::new("$HOME/pycascading/deploys"),
            cache_dir: RemoteDir::new("/tmp/pycascading-cache"),
            ssh: "ssh".to_string(),
            ssh_options: Vec::new(),
            hadoop_options: Vec::new(),
            tar: "tar".to_string(),
        }
    }
}
