//! Configuration file management.
//!
//! Handles reading and validating the YAML configuration that describes the
//! server, the login method and the secret path.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Tool configuration loaded from YAML.
///
/// ```yaml
/// vault:
///   server: http://localhost:8200
///   authMethod: kubernetes
///   loginPath: kubernetes
///   role: myrole
///   secretPath: demokv/mytest
///   kvVersion: v1
/// kubeToken: eyJhbGciOi...
/// ```
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Server and path settings
    pub vault: VaultSettings,
    /// Service account JWT, used by the kubernetes login
    pub kube_token: Zeroizing<String>,
    /// Username, used by the userpass login
    pub username: String,
    /// Password, used by the userpass login
    pub password: Zeroizing<String>,
}

/// The `vault` section of the configuration.
#[derive(Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VaultSettings {
    /// Base URL of the server, e.g. `http://localhost:8200`
    pub server: String,
    /// Role requested by the kubernetes login
    pub role: String,
    /// Mount path of the auth backend
    pub login_path: String,
    /// Path of the secret, relative to the KV engine segment
    pub secret_path: String,
    /// `kubernetes` or `userpass`, compared case-insensitively
    pub auth_method: String,
    /// KV engine segment, e.g. `v1`
    pub kv_version: String,
    /// Per-request timeout in seconds
    pub timeout_seconds: Option<u64>,
    #[serde(skip)]
    token: Zeroizing<String>,
}

impl Config {
    /// Load and validate configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` if the file cannot be read,
    /// `ConfigError::Parse` if the YAML is malformed, or
    /// `ConfigError::MissingField` if a required field is empty.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        config.validate()?;

        debug!(
            server = %config.server(),
            auth_method = %config.vault.auth_method,
            "config loaded"
        );
        Ok(config)
    }

    /// Validate that every field needed to reach the server is present.
    ///
    /// The auth method value itself is not checked here; an unknown method is
    /// reported by the authenticator as `AuthError::UnsupportedMethod`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingField` naming the first empty field.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("vault.server", &self.vault.server),
            ("vault.authMethod", &self.vault.auth_method),
            ("vault.loginPath", &self.vault.login_path),
            ("vault.secretPath", &self.vault.secret_path),
            ("vault.kvVersion", &self.vault.kv_version),
        ];

        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingField { field }.into());
            }
        }

        Ok(())
    }

    /// Server base URL without a trailing slash.
    pub fn server(&self) -> &str {
        self.vault.server.trim_end_matches('/')
    }

    /// URL of the configured secret: `{server}/{kvVersion}/{secretPath}`.
    pub fn secret_url(&self) -> String {
        [
            self.server(),
            self.vault.kv_version.as_str(),
            self.vault.secret_path.as_str(),
        ]
        .join("/")
    }

    /// Per-request timeout for the HTTP transport.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(
            self.vault
                .timeout_seconds
                .unwrap_or(constants::DEFAULT_TIMEOUT_SECS),
        )
    }

    /// Client token obtained by the last successful login.
    pub fn token(&self) -> Option<&str> {
        if self.vault.token.is_empty() {
            None
        } else {
            Some(self.vault.token.as_str())
        }
    }

    pub(crate) fn set_token(&mut self, token: String) {
        self.vault.token = Zeroizing::new(token);
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        ""
    } else {
        "[redacted]"
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("vault", &self.vault)
            .field("kube_token", &redact(&self.kube_token))
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .finish()
    }
}

impl fmt::Debug for VaultSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaultSettings")
            .field("server", &self.server)
            .field("role", &self.role)
            .field("login_path", &self.login_path)
            .field("secret_path", &self.secret_path)
            .field("auth_method", &self.auth_method)
            .field("kv_version", &self.kv_version)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("token", &redact(&self.token))
            .finish()
    }
}
