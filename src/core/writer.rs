//! Submit secrets to the configured path.

use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::transport::{Request, Transport};
use crate::core::types::LocalSecrets;
use crate::error::{AuthError, Result, SecretError};

/// Writes a string map to `{server}/{kvVersion}/{secretPath}`.
pub struct SecretWriter<'a> {
    transport: &'a dyn Transport,
}

impl<'a> SecretWriter<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// POST `values` as a JSON object.
    ///
    /// No read-back is performed after the write.
    ///
    /// # Returns
    ///
    /// The 2xx status returned by the server.
    ///
    /// # Errors
    ///
    /// Returns `SecretError::WriteRejected` with the status and body for any
    /// status outside `[200, 300)`.
    pub fn write(&self, config: &Config, values: &LocalSecrets) -> Result<u16> {
        let token = config.token().ok_or(AuthError::NotAuthenticated)?;
        let url = config.secret_url();
        let body = serde_json::to_value(values).map_err(SecretError::Encode)?;

        debug!(url = %url, keys = values.len(), "writing secrets");
        let request = Request::post(url, body).header(constants::TOKEN_HEADER, token);
        let response = self.transport.send(&request)?;

        if !response.is_success() {
            return Err(SecretError::WriteRejected {
                status: response.status,
                body: response.text().into_owned(),
            }
            .into());
        }

        debug!(status = response.status, "secrets written");
        Ok(response.status)
    }
}
