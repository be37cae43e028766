//! Launcher configuration (pycascading.yaml)
//!
//! The file tells the local runner where the Jython, Cascading and Hadoop
//! installations live and tells the deployer which server and remote
//! directories to use. Every field is optional.
//!
//! Lookup order:
//! 1. `--config` / `PYCASCADING_CONFIG` (must exist)
//! 2. `<home>/pycascading.yaml` when a home was given on the command line
//! 3. `<config dir>/pycascading/config.yaml` (e.g. `~/.config` on Linux)
//! 4. Built-in defaults

pub mod library;
pub mod tools;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

pub use library::{LibrarySet, default_library_sets};
pub use tools::{BuildConfig, DeployConfig, RuntimeConfig};

/// Configuration file name inside a PyCascading home
pub const CONFIG_FILE: &str = "pycascading.yaml";

/// Directory under the user's config dir holding `config.yaml`
const USER_CONFIG_DIR: &str = "pycascading";

/// Built master jar, relative to the PyCascading home
pub const MASTER_JAR: &str = "build/pycascading.jar";

/// Bootstrap script, relative to the PyCascading home
pub const BOOTSTRAP_SCRIPT: &str = "python/pycascading/bootstrap.py";

/// Launcher configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// PyCascading checkout; defaults to the current directory
    pub home: Option<PathBuf>,

    /// Treat unknown roots and empty globs as errors instead of skipping them
    pub strict_globs: bool,

    /// Installation root per library set
    pub roots: BTreeMap<String, PathBuf>,

    /// Library sets in classpath order
    pub library_sets: Vec<LibrarySet>,

    pub runtime: RuntimeConfig,

    pub build: BuildConfig,

    pub deploy: DeployConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            home: None,
            strict_globs: false,
            roots: BTreeMap::new(),
            library_sets: default_library_sets(),
            runtime: RuntimeConfig::default(),
            build: BuildConfig::default(),
            deploy: DeployConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty file deserializes to unit, not to an empty mapping
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and parse a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let display = path.display().to_string();
        if !path.is_file() {
            return Err(error::config::not_found(display));
        }
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(&display, e.to_string()))?;
        Self::from_yaml(&yaml).map_err(|e| match e {
            crate::error::LaunchError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(display, reason)
            }
            other => other,
        })
    }

    /// Resolve and load the configuration for one launcher run
    ///
    /// `home` comes from `--home` / `PYCASCADING_HOME` and overrides the
    /// file's own `home` field.
    pub fn load(explicit: Option<&Path>, home: Option<&Path>) -> Result<Self> {
        let mut config = match Self::locate(explicit, home) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };
        if let Some(home) = home {
            config.home = Some(home.to_path_buf());
        }
        Ok(config)
    }

    fn locate(explicit: Option<&Path>, home: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        if let Some(home) = home {
            let candidate = home.join(CONFIG_FILE);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        dirs::config_dir()
            .map(|dir| dir.join(USER_CONFIG_DIR).join("config.yaml"))
            .filter(|candidate| candidate.is_file())
    }

    /// Check invariants serde cannot express
    pub fn validate(&self) -> Result<()> {
        for set in &self.library_sets {
            if set.name.trim().is_empty() {
                return Err(error::config::invalid("library set with an empty name"));
            }
            if set.patterns.iter().any(|p| p.trim().is_empty()) {
                return Err(error::config::invalid(format!(
                    "library set '{}' has an empty pattern",
                    set.name
                )));
            }
        }
        if self.deploy.server.trim().is_empty() {
            return Err(error::config::invalid("deploy.server must not be empty"));
        }
        if self.deploy.build_dir.is_empty() || self.deploy.deploys_dir.is_empty() {
            return Err(error::config::invalid(
                "deploy.build_dir and deploy.deploys_dir must not be empty",
            ));
        }
        // Goes into HADOOP_OPTS, which the JVM launcher splits on whitespace
        if self.deploy.cache_dir.template().contains(char::is_whitespace) {
            return Err(error::config::invalid(
                "deploy.cache_dir must not contain whitespace",
            ));
        }
        for (key, program) in [
            ("runtime.java", &self.runtime.java),
            ("build.tool", &self.build.tool),
            ("deploy.ssh", &self.deploy.ssh),
            ("deploy.tar", &self.deploy.tar),
        ] {
            if program.trim().is_empty() {
                return Err(error::config::invalid(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }

    /// PyCascading home, falling back to the current directory
    pub fn home_dir(&self) -> PathBuf {
        self.home
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn master_jar(&self) -> PathBuf {
        self.home_dir().join(MASTER_JAR)
    }

    pub fn bootstrap_script(&self) -> PathBuf {
        self.home_dir().join(BOOTSTRAP_SCRIPT)
    }

    pub fn build_file(&self) -> PathBuf {
        self.home_dir().join(&self.build.file)
    }
}
