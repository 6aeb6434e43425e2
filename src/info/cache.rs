//! CommandCache - in-memory cache of external command output.

use std::collections::HashMap;
use std::process::{Command, Stdio};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

/// How long cached output stays valid.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct CacheEntry {
    value: String,
    stored: Instant,
}

/// Command output keyed by command line, shared by the probe workers.
pub struct CommandCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for CommandCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl CommandCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Cache key for a command line.
    pub fn key(program: &str, args: &[&str]) -> String {
        format!("cmd:{}:{}", program, args.join(":"))
    }

    /// Cached value for `key`, unless it has expired.
    pub fn get(&self, key: &str) -> Option<String> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(key)
            .filter(|entry| entry.stored.elapsed() < self.ttl)
            .map(|entry| entry.value.clone())
    }

    pub fn insert(&self, key: impl Into<String>, value: impl Into<String>) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            key.into(),
            CacheEntry {
                value: value.into(),
                stored: Instant::now(),
            },
        );
    }

    /// Run `program` and return its trimmed stdout.
    ///
    /// Only successful runs are cached. Returns `None` when the command
    /// cannot be started or exits non-zero.
    pub fn run(&self, program: &str, args: &[&str]) -> Option<String> {
        let key = Self::key(program, args);
        if let Some(value) = self.get(&key) {
            return Some(value);
        }

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| log::debug!("{} could not be run: {}", program, e))
            .ok()?;
        if !output.status.success() {
            log::debug!("{} exited with {}", program, output.status);
            return None;
        }

        let value = String::from_utf8_lossy(&output.stdout).trim().to_string();
        self.insert(key, value.clone());
        Some(value)
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}
