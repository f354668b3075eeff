//! Print mode - show the secrets stored at the configured path.

use crate::cli::output;
use crate::core::reconcile::stringify;
use crate::core::session::Session;
use crate::error::{Result, SecretError};

/// Print every secret as `key: value`, or as JSON when `json` is set.
pub fn execute(session: &Session<'_>, json: bool) -> Result<()> {
    let secrets = session.read()?;

    if json {
        let rendered = serde_json::to_string_pretty(&secrets).map_err(SecretError::Encode)?;
        println!("{}", rendered);
        return Ok(());
    }

    if secrets.is_empty() {
        output::dimmed("no secrets stored");
        return Ok(());
    }

    for (key, value) in &secrets {
        output::secret(key, &stringify(value));
    }

    Ok(())
}
