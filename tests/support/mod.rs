//! Test support utilities for vaulttool integration tests.
//!
//! Provides isolated file setup, command helpers and wiremock endpoints.

#![allow(dead_code)]

pub mod commands;
pub mod mocks;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use mocks::*;

use std::path::PathBuf;

use tempfile::TempDir;

/// Test environment with an isolated temp directory for config files.
pub struct Test {
    /// Temporary directory holding config and secrets files
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Write a file into the test directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, contents).expect("failed to write test file");
        path
    }

    /// Write a userpass config pointing at `server`.
    pub fn userpass_config(&self, server: &str) -> PathBuf {
        self.write_file("config.yaml", &userpass_config(server))
    }

    /// Write a kubernetes config pointing at `server`.
    pub fn kubernetes_config(&self, server: &str) -> PathBuf {
        self.write_file("config.yaml", &kubernetes_config(server))
    }

    /// Write a secrets file with the given mode and values.
    pub fn secrets_file(&self, mode: &str, values: &[(&str, &str)]) -> PathBuf {
        let mut contents = format!("mode: {}\nvalues:\n", mode);
        for (k, v) in values {
            contents.push_str(&format!("  {}: \"{}\"\n", k, v));
        }
        self.write_file("secrets.yaml", &contents)
    }
}
