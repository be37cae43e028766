//! Shell words for the scripts and commands that run on the remote host
//!
//! Two quoting modes exist. [`quote`] produces a word the shell takes
//! literally. [`quote_expanding`] keeps `$VAR` references live, so they are
//! resolved by the shell that finally executes the text, which for generated
//! scripts is the remote one.

use std::fmt;

use serde::{Deserialize, Serialize};

const SAFE_CHARS: &str = "-_./=:@%+,";

/// Quote `s` as a single shell word with no expansion
pub fn quote(s: &str) -> String {
    if !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SAFE_CHARS.contains(c))
    {
        return s.to_string();
    }
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Quote `s` in double quotes, leaving `$` references for the executing shell
pub fn quote_expanding(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if matches!(c, '"' | '\\' | '`') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// Directory on the remote host, kept as an unexpanded template
///
/// Values such as `$HOME/pycascading/build` are never resolved locally.
/// They are only rendered into script text through [`RemoteDir::shell_word`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteDir(String);

impl RemoteDir {
    pub fn new(template: impl Into<String>) -> Self {
        Self(template.into())
    }

    /// The template exactly as configured
    pub fn template(&self) -> &str {
        &self.0
    }

    /// Word for a script executed on the remote host
    pub fn shell_word(&self) -> String {
        quote_expanding(self.trimmed())
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    fn trimmed(&self) -> &str {
        let t = self.0.trim_end_matches('/');
        if t.is_empty() { "/" } else { t }
    }
}

impl fmt::Display for RemoteDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
