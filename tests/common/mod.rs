//! Common test utilities for launcher integration tests

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch area holding a PyCascading home, job files, a local TMPDIR and
/// the home directory of a pretend remote server
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("tmp")).expect("Failed to create tmp directory");
        std::fs::create_dir_all(path.join("remote-home")).expect("Failed to create remote home");
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Local TMPDIR handed to the binaries
    pub fn tmp_dir(&self) -> PathBuf {
        self.path.join("tmp")
    }

    /// `$HOME` of the pretend server
    pub fn remote_home(&self) -> PathBuf {
        self.path.join("remote-home")
    }

    /// Sorted entry names of a directory, empty if it does not exist
    pub fn entries(dir: &Path) -> Vec<String> {
        let Ok(read) = std::fs::read_dir(dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = read
            .map(|e| {
                e.expect("Failed to read entry")
                    .file_name()
                    .to_string_lossy()
                    .into_owned()
            })
            .collect();
        names.sort();
        names
    }

    /// The single deploy directory created on the pretend server
    pub fn only_deploy_dir(&self) -> PathBuf {
        let deploys = self.remote_home().join("pycascading/deploys");
        let entries = Self::entries(&deploys);
        assert_eq!(entries.len(), 1, "expected one deploy dir, got {entries:?}");
        assert!(entries[0].starts_with("deploy-"));
        deploys.join(&entries[0])
    }

    /// Create a PyCascading home with a built master jar and bootstrap script
    pub fn create_pycascading_home(&self) -> PathBuf {
        self.write_file("pycascading/build/pycascading.jar", "master jar");
        self.write_file("pycascading/python/pycascading/bootstrap.py", "# bootstrap");
        self.write_file("pycascading/java/build.xml", "<project/>");
        self.path.join("pycascading")
    }

    /// Write a configuration file and return its path
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        self.write_file("pycascading.yaml", yaml)
    }

    /// Stand-in for ssh that runs the remote command locally, with
    /// `remote_home()` as `$HOME`
    #[cfg(unix)]
    pub fn fake_ssh(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;
        let script = format!(
            "#!/bin/sh\nfor last; do :; done\nHOME='{}' exec sh -c \"$last\"\n",
            self.remote_home().display()
        );
        let path = self.write_file("bin/fake-ssh", &script);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake ssh executable");
        path
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
