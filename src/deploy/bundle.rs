//! The local deploy bundle
//!
//! Layout of the temporary directory that gets streamed to the server:
//!
//! ```text
//! PyCascading-tmp-XXXXXX/
//!   pycascading.jar   (only with -b)
//!   bootstrap.py      (only with -b)
//!   sources/          main script and additional files
//!   other/            copy-only files
//!   setup.sh
//!   run.sh            (only with a main script)
//! ```
//!
//! Inputs are linked, not copied. Each link keeps the file name the input
//! was given under and points at its canonical path, so the archive step
//! (which dereferences links) captures the real contents no matter where the
//! deployer was started from.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::{self, Result};
use crate::temp;

pub const SOURCES_DIR: &str = "sources";
pub const OTHER_DIR: &str = "other";
pub const SETUP_SCRIPT: &str = "setup.sh";
pub const RUN_SCRIPT: &str = "run.sh";
pub const MASTER_JAR_NAME: &str = "pycascading.jar";
pub const BOOTSTRAP_NAME: &str = "bootstrap.py";

/// Temporary bundle directory, removed when dropped
#[derive(Debug)]
pub struct Bundle {
    dir: TempDir,
}

impl Bundle {
    /// Create an empty bundle in a fresh, uniquely named directory
    pub fn create() -> Result<Self> {
        Ok(Self {
            dir: temp::bundle_dir()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn sources_dir(&self) -> PathBuf {
        self.root().join(SOURCES_DIR)
    }

    pub fn other_dir(&self) -> PathBuf {
        self.root().join(OTHER_DIR)
    }

    /// Link the freshly built master jar and bootstrap script into the root
    pub fn stage_build_artifacts(&self, master_jar: &Path, bootstrap: &Path) -> Result<()> {
        link_as(self.root(), master_jar, MASTER_JAR_NAME)?;
        link_as(self.root(), bootstrap, BOOTSTRAP_NAME)?;
        Ok(())
    }

    /// Create `sources/` and `other/` and link every input into them
    ///
    /// The main script and `additional` files go to `sources/` (they end up
    /// inside the job jar); `copy_only` files go to `other/`.
    pub fn stage_inputs(
        &self,
        main_script: &Path,
        additional: &[PathBuf],
        copy_only: &[PathBuf],
    ) -> Result<()> {
        let sources = self.sources_dir();
        let other = self.other_dir();
        std::fs::create_dir(&sources)?;
        std::fs::create_dir(&other)?;

        for input in std::iter::once(main_script).chain(additional.iter().map(PathBuf::as_path)) {
            link_into(&sources, SOURCES_DIR, input)?;
        }
        for input in copy_only {
            link_into(&other, OTHER_DIR, input)?;
        }
        Ok(())
    }

    /// Write an executable script into the bundle root
    pub fn write_script(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.root().join(name);
        std::fs::write(&path, contents)
            .map_err(|e| error::fs::write_failed(path.display().to_string(), e.to_string()))?;
        make_executable(&path)?;
        Ok(path)
    }

    /// Names of the entries directly under `subtree`, sorted
    pub fn entries(&self, subtree: &str) -> Result<Vec<String>> {
        let dir = self.root().join(subtree);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = std::fs::read_dir(&dir)?
            .map(|entry| entry.map(|e| e.file_name().to_string_lossy().into_owned()))
            .collect::<std::io::Result<Vec<_>>>()?;
        names.sort();
        Ok(names)
    }

    /// Remove the bundle directory now, reporting failures
    pub fn close(self) -> Result<()> {
        self.dir.close()?;
        Ok(())
    }
}

/// Whether a copy-only file would be skipped by the remote `other/*` merge
pub fn is_hidden_name(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().starts_with('.'))
}

/// Link `input` into `dir` under the name it was given on the command line,
/// pointing at its canonical path
fn link_into(dir: &Path, subtree: &str, input: &Path) -> Result<PathBuf> {
    let canonical = canonical_input(input)?;
    let name = input
        .file_name()
        .ok_or_else(|| error::fs::link_failed(input.display().to_string(), "no file name"))?
        .to_os_string();
    let target = dir.join(&name);
    if target.symlink_metadata().is_ok() {
        return Err(error::fs::duplicate_entry(
            name.to_string_lossy(),
            subtree,
        ));
    }
    create_link(&canonical, &target)?;
    Ok(target)
}

fn link_as(dir: &Path, input: &Path, name: &str) -> Result<PathBuf> {
    let canonical = canonical_input(input)?;
    let target = dir.join(name);
    create_link(&canonical, &target)?;
    Ok(target)
}

fn canonical_input(input: &Path) -> Result<PathBuf> {
    dunce::canonicalize(input).map_err(|_| error::fs::not_found(input.display().to_string()))
}

#[cfg(unix)]
fn create_link(original: &Path, link: &Path) -> Result<()> {
    std::os::unix::fs::symlink(original, link)
        .map_err(|e| error::fs::link_failed(original.display().to_string(), e.to_string()))
}

#[cfg(not(unix))]
fn create_link(original: &Path, link: &Path) -> Result<()> {
    // No symlinks here, so the content is copied up front
    std::fs::copy(original, link)
        .map(|_| ())
        .map_err(|e| error::fs::link_failed(original.display().to_string(), e.to_string()))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o755))?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
