//! Environment record handed to every spawned tool.

use std::collections::BTreeMap;
use std::path::Path;

pub const PATH_VAR: &str = "PATH";

#[cfg(windows)]
const PATH_SEPARATOR: char = ';';
#[cfg(not(windows))]
const PATH_SEPARATOR: char = ':';

/// Immutable snapshot of the variables a child process runs with.
///
/// Provisioning steps never touch the process environment; each step returns
/// a new `ToolEnv` with its additions and the next step threads that forward.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolEnv {
    vars: BTreeMap<String, String>,
}

impl ToolEnv {
    /// Snapshot the current process environment. Non UTF-8 entries are skipped.
    pub fn from_process() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(key, value)| {
            Some((key.into_string().ok()?, value.into_string().ok()?))
        }))
    }

    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = vars.into_iter().map(|(key, value)| (normalize_key(key.into()), value.into()));
        Self { vars: vars.collect() }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(&normalize_key(name.to_string())).map(String::as_str)
    }

    /// Value of `name` when it is set to something other than an empty string.
    pub fn non_empty(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn path(&self) -> Option<&str> {
        self.get(PATH_VAR)
    }

    pub fn with_var(&self, name: &str, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        next.vars.insert(normalize_key(name.to_string()), value.into());
        next
    }

    pub fn with_var_if_absent(&self, name: &str, value: impl Into<String>) -> Self {
        if self.contains(name) { self.clone() } else { self.with_var(name, value) }
    }

    /// Put `dir` in front of the tool search path.
    pub fn with_path_prepended(&self, dir: &Path) -> Self {
        let dir = dir.to_string_lossy();
        let path = match self.path() {
            Some(existing) if !existing.is_empty() => format!("{dir}{PATH_SEPARATOR}{existing}"),
            _ => dir.into_owned(),
        };
        self.with_var(PATH_VAR, path)
    }

    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

// Windows variable names are case-insensitive (`Path` vs `PATH`).
fn normalize_key(key: String) -> String {
    if cfg!(windows) { key.to_uppercase() } else { key }
}
