//! Combine local values with the secrets already stored remotely.

use serde_json::Value;

use crate::core::document::Mode;
use crate::core::types::{LocalSecrets, RemoteSecrets, SecretValue};

/// Compute the values to write for a mode.
///
/// - `Update`: local values win; keys only present remotely are added,
///   stringified with [`stringify`].
/// - `Write`: local values verbatim, `remote` is ignored.
pub fn reconcile(mode: Mode, mut local: LocalSecrets, remote: &RemoteSecrets) -> LocalSecrets {
    match mode {
        Mode::Update => {
            for (key, value) in remote {
                local
                    .entry(key.clone())
                    .or_insert_with(|| stringify(value));
            }
            local
        }
        Mode::Write => local,
    }
}

/// Render a remote JSON value as a secret string.
///
/// Strings are taken as-is; every other value uses its compact JSON text
/// (`5432`, `true`, `null`, `{"a":1}`).
pub fn stringify(value: &Value) -> SecretValue {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
