//! Classpath assembly for the local runner
//!
//! Each library set contributes the files matching its glob patterns under
//! its installation root. Sets are visited in configured order, patterns in
//! listed order, and matches of one pattern in lexicographic order of their
//! path below the root (the order a shell glob would produce). The JVM
//! resolves duplicate classes by first match, so order is significant.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::config::LibrarySet;
use crate::error::{self, Result};

/// Separator between classpath entries
#[cfg(not(windows))]
pub const SEPARATOR: char = ':';
#[cfg(windows)]
pub const SEPARATOR: char = ';';

/// Ordered, duplicate-free list of classpath entries
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classpath {
    entries: Vec<PathBuf>,
    seen: HashSet<PathBuf>,
}

impl Classpath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `entry` unless it is already present. Returns whether it was added.
    pub fn push(&mut self, entry: PathBuf) -> bool {
        if self.seen.contains(&entry) {
            return false;
        }
        self.seen.insert(entry.clone());
        self.entries.push(entry);
        true
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for Classpath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{}", entry.display())?;
        }
        Ok(())
    }
}

/// Build the classpath from `sets`, looking up each set's root in `roots`
///
/// With `strict` unset, a set without a root and a pattern without matches
/// contribute nothing. With `strict` set, both are errors.
pub fn assemble(
    sets: &[LibrarySet],
    roots: &BTreeMap<String, PathBuf>,
    strict: bool,
) -> Result<Classpath> {
    let mut classpath = Classpath::new();

    for set in sets {
        let Some(root) = roots.get(&set.name) else {
            if strict {
                return Err(error::classpath::root_missing(&set.name));
            }
            continue;
        };

        for pattern in &set.patterns {
            let matches = expand_pattern(root, pattern)?;
            if matches.is_empty() && strict {
                return Err(error::classpath::no_matches(
                    pattern,
                    root.display().to_string(),
                ));
            }
            for path in matches {
                classpath.push(path);
            }
        }
    }

    Ok(classpath)
}

/// List files under `root` matching `pattern`, in shell glob order
///
/// A root that does not exist simply has no matches.
pub fn expand_pattern(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let glob = Glob::new(pattern)
        .map_err(|e| error::classpath::invalid_glob(pattern, e.to_string()))?;

    let mut walker = WalkDir::new(root).follow_links(true).min_depth(1);
    if !pattern.contains("**") {
        walker = walker.max_depth(pattern.split('/').count());
    }

    let mut matches: Vec<(String, PathBuf)> = walker
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| {
            let relative = entry
                .path()
                .strip_prefix(root)
                .ok()?
                .to_string_lossy()
                .replace('\\', "/");
            let candidate = CandidatePath::from(relative.as_str());
            if glob.matched(&candidate).is_some() {
                Some((relative, entry.into_path()))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(matches.into_iter().map(|(_, path)| path).collect())
}
