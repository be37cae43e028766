//! Library sets that make up the local classpath

use serde::{Deserialize, Serialize};

/// A named group of jars, located by glob patterns under one installation root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySet {
    /// Set name, also the key into `roots`
    pub name: String,

    /// Glob patterns relative to the set's root, expanded in order
    pub patterns: Vec<String>,
}

impl LibrarySet {
    pub fn new<I, S>(name: impl Into<String>, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }
}

/// Jython, Cascading and Hadoop, in classpath order
pub fn default_library_sets() -> Vec<LibrarySet> {
    vec![
        LibrarySet::new("jython", ["jython.jar"]),
        LibrarySet::new(
            "cascading",
            [
                "cascading-[0-9]*.jar",
                "lib/cascading-*.jar",
                "lib/jgrapht-*.jar",
            ],
        ),
        LibrarySet::new("hadoop", ["hadoop-*core*.jar", "lib/*.jar"]),
    ]
}
