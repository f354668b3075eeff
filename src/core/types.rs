//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// A secret key name (e.g., `username`, `DATABASE_URL`).
pub type SecretKey = String;

/// A plaintext secret value as supplied locally.
pub type SecretValue = String;

/// Locally supplied secrets, ordered by key.
pub type LocalSecrets = BTreeMap<SecretKey, SecretValue>;

/// Secrets as returned by the server. Values may be any JSON type.
pub type RemoteSecrets = serde_json::Map<String, serde_json::Value>;
