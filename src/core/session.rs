//! The authenticated workflow.
//!
//! A `Session` owns the configuration, logs in once when opened, and runs
//! the read and write flows against the configured secret path.

use tracing::{debug, warn};

use crate::core::auth::Authenticator;
use crate::core::config::Config;
use crate::core::document::{Mode, SecretsDocument};
use crate::core::reader::SecretReader;
use crate::core::reconcile::reconcile;
use crate::core::transport::Transport;
use crate::core::types::{RemoteSecrets, SecretKey};
use crate::core::writer::SecretWriter;
use crate::error::Result;

/// Result of applying a secrets document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// Values were written.
    Written {
        mode: Mode,
        status: u16,
        keys: Vec<SecretKey>,
    },
    /// The mode was not recognized, so nothing was read or written.
    Skipped { mode: String },
}

/// An authenticated connection to the secret store.
pub struct Session<'a> {
    config: Config,
    transport: &'a dyn Transport,
}

impl<'a> Session<'a> {
    /// Log in and return a session ready for reads and writes.
    ///
    /// # Errors
    ///
    /// Returns any `AuthError` or `TransportError` raised by the login.
    pub fn open(mut config: Config, transport: &'a dyn Transport) -> Result<Self> {
        Authenticator::new(transport).authenticate(&mut config)?;
        Ok(Self { config, transport })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Fetch the secrets at the configured path.
    pub fn read(&self) -> Result<RemoteSecrets> {
        SecretReader::new(self.transport).read(&self.config)
    }

    /// Write a secrets document according to its mode.
    ///
    /// `UPDATE` reads the remote secrets first and fills in keys missing
    /// locally. `WRITE` sends the local values as they are. Any other mode
    /// is skipped without contacting the server.
    ///
    /// # Errors
    ///
    /// Returns the reader's errors for `UPDATE`, and
    /// `SecretError::WriteRejected` if the server refuses the write.
    pub fn apply(&self, document: SecretsDocument) -> Result<WriteOutcome> {
        let Some(mode) = document.mode() else {
            warn!(mode = %document.mode, "unrecognized mode, nothing written");
            return Ok(WriteOutcome::Skipped {
                mode: document.mode,
            });
        };

        let remote = match mode {
            Mode::Update => self.read()?,
            Mode::Write => RemoteSecrets::new(),
        };
        let values = reconcile(mode, document.values, &remote);
        debug!(%mode, keys = values.len(), "reconciled secrets");

        let status = SecretWriter::new(self.transport).write(&self.config, &values)?;

        Ok(WriteOutcome::Written {
            mode,
            status,
            keys: values.into_keys().collect(),
        })
    }
}
