//! Write mode - apply a secrets file to the configured path.

use crate::cli::output;
use crate::core::document::SecretsDocument;
use crate::core::session::{Session, WriteOutcome};
use crate::error::Result;

/// Apply `document` and report what happened.
pub fn execute(session: &Session<'_>, document: SecretsDocument) -> Result<()> {
    match session.apply(document)? {
        WriteOutcome::Written { mode, status, keys } => {
            output::success(&format!(
                "wrote {} secrets to {} ({}, HTTP {})",
                keys.len(),
                output::path(&session.config().secret_url()),
                mode,
                status
            ));
        }
        WriteOutcome::Skipped { mode } => {
            output::warn(&format!("unrecognized mode '{}', nothing written", mode));
            output::hint("set mode to UPDATE or WRITE in the secrets file");
        }
    }

    Ok(())
}
