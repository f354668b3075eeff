//! Fetch the secrets stored at the configured path.

use serde::Deserialize;
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::transport::{Request, Transport};
use crate::core::types::RemoteSecrets;
use crate::error::{AuthError, Result, SecretError};

#[derive(Deserialize)]
struct SecretResponse {
    data: Option<serde_json::Value>,
}

/// Reads the key/value map at `{server}/{kvVersion}/{secretPath}`.
pub struct SecretReader<'a> {
    transport: &'a dyn Transport,
}

impl<'a> SecretReader<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Fetch the `data` object of the configured secret.
    ///
    /// # Errors
    ///
    /// - `AuthError::NotAuthenticated` if no login happened yet
    /// - `SecretError::FetchFailed` for any status other than 200
    /// - `SecretError::MalformedResponse` if the body has no `data` object
    pub fn read(&self, config: &Config) -> Result<RemoteSecrets> {
        let token = config.token().ok_or(AuthError::NotAuthenticated)?;
        let url = config.secret_url();

        debug!(url = %url, "querying secret");
        let request = Request::get(url).header(constants::TOKEN_HEADER, token);
        let response = self.transport.send(&request)?;

        if response.status != 200 {
            return Err(SecretError::FetchFailed {
                status: response.status,
            }
            .into());
        }

        let parsed: SecretResponse = serde_json::from_slice(&response.body)
            .map_err(|e| SecretError::MalformedResponse(e.to_string()))?;

        match parsed.data {
            Some(serde_json::Value::Object(data)) => {
                debug!(keys = data.len(), "secret fetched");
                Ok(data)
            }
            Some(_) => {
                Err(SecretError::MalformedResponse("data is not an object".to_string()).into())
            }
            None => Err(SecretError::MalformedResponse("data is missing".to_string()).into()),
        }
    }
}
