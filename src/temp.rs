//! Local bundle directories

use std::path::PathBuf;

use tempfile::TempDir;

use crate::error::Result;

/// Name prefix of local bundle directories
pub const BUNDLE_PREFIX: &str = "PyCascading-tmp-";

/// Create a fresh, uniquely named bundle directory; removed when dropped
///
/// A relative TMPDIR is ignored so the bundle never lands inside the
/// directory being deployed from.
pub fn bundle_dir() -> Result<TempDir> {
    let base = Some(std::env::temp_dir())
        .filter(|dir| dir.is_absolute())
        .unwrap_or_else(|| PathBuf::from("/tmp"));
    let dir = tempfile::Builder::new()
        .prefix(BUNDLE_PREFIX)
        .tempdir_in(base)?;
    Ok(dir)
}
