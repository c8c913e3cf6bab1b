//! Test support utilities for envseed integration tests.
//!
//! Provides an isolated working directory with its own hosts file.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// The hosts file lives inside the temp directory so runs never touch the
/// real system file. Child processes use `.current_dir()`, so tests can run
/// in parallel.
pub struct Test {
    /// Temporary working directory
    pub dir: TempDir,
}

impl Test {
    /// Create an environment with a seeded hosts file.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        std::fs::write(dir.path().join("hosts"), SAMPLE_HOSTS).expect("failed to seed hosts");
        Self { dir }
    }

    /// Path to the sandboxed hosts file.
    pub fn hosts_path(&self) -> PathBuf {
        self.dir.path().join("hosts")
    }

    /// Read a file from the working directory.
    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name))
            .unwrap_or_else(|e| panic!("failed to read {}: {}", name, e))
    }

    /// Parse `KEY=VALUE` lines of a file from the working directory.
    pub fn env_pairs(&self, name: &str) -> Vec<(String, String)> {
        self.read(name)
            .lines()
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .filter_map(|l| l.split_once('='))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    /// Look up one value in an env file.
    pub fn env_value(&self, name: &str, key: &str) -> Option<String> {
        self.env_pairs(name)
            .into_iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }
}
