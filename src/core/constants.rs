//! Constants used throughout vaulttool.
//!
//! Centralizes magic strings and configuration values.

/// Header carrying the client token on secret requests.
pub const TOKEN_HEADER: &str = "X-Vault-Token";

/// API version segment used by the login endpoints.
pub const AUTH_API_VERSION: &str = "v1";

/// Default per-request timeout when `vault.timeoutSeconds` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Upper bound on the response body size read from the server (16 MiB).
pub const MAX_RESPONSE_BYTES: u64 = 16 * 1024 * 1024;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "VAULTTOOL_LOG";
