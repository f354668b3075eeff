//! Secrets file handling.
//!
//! A secrets file names the reconciliation mode and the values to write:
//!
//! ```yaml
//! mode: UPDATE
//! values:
//!   username: admin
//!   password: changeme
//! ```

use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::core::types::LocalSecrets;
use crate::error::{ConfigError, Result};

/// How local values interact with the secrets already stored remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Keep local values, fill in keys that only exist remotely.
    Update,
    /// Replace the remote secrets with the local values.
    Write,
}

impl Mode {
    /// Parse a mode string, ignoring case and surrounding whitespace.
    ///
    /// Returns `None` for anything other than `UPDATE` or `WRITE`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("update") {
            Some(Mode::Update)
        } else if s.eq_ignore_ascii_case("write") {
            Some(Mode::Write)
        } else {
            None
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Update => write!(f, "UPDATE"),
            Mode::Write => write!(f, "WRITE"),
        }
    }
}

/// Local secrets to write, loaded from YAML.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SecretsDocument {
    /// Raw mode string as written in the file
    pub mode: String,
    /// Values to write
    pub values: LocalSecrets,
}

impl SecretsDocument {
    /// Load a secrets file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading secrets file");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let document: Self =
            serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        debug!(mode = %document.mode, values = document.values.len(), "secrets file loaded");
        Ok(document)
    }

    /// The parsed mode, or `None` if the mode string is not recognized.
    pub fn mode(&self) -> Option<Mode> {
        Mode::parse(&self.mode)
    }
}
