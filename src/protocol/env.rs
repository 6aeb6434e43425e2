//! Environment signals consulted by protocol detection and tool lookup.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Read access to environment variables and executables on `PATH`.
///
/// Detection, the external encoders and the info probes only see the
/// process environment through this trait, so tests can substitute a fixed
/// one. Probes run on worker threads, hence `Sync`.
pub trait Environment: Sync {
    /// Value of an environment variable, if set.
    fn var(&self, key: &str) -> Option<String>;

    /// Full path of an executable found on this environment's `PATH`.
    fn find_binary(&self, name: &str) -> Option<PathBuf> {
        let path = self.var("PATH")?;
        find_in_path(&path, name)
    }
}

/// The real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed set of variables, independent of the process environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    vars: HashMap<String, String>,
}

impl StaticEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a variable.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl Environment for StaticEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Search a `PATH`-style list for an executable called `name`.
pub fn find_in_path(path_var: &str, name: &str) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
