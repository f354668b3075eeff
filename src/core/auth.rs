//! Login against the server's auth backends.
//!
//! Two strategies are supported, both ending in a client token stored on the
//! configuration:
//!
//! - **kubernetes**: `POST {server}/v1/auth/{loginPath}/login` with
//!   `{"jwt": kubeToken, "role": role}`
//! - **userpass**: `POST {server}/v1/auth/{loginPath}/login/{username}` with
//!   `{"password": password}`

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants;
use crate::core::transport::{Request, Response, Transport};
use crate::error::{AuthError, Result};

/// Supported login methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMethod {
    Kubernetes,
    Userpass,
}

impl FromStr for AuthMethod {
    type Err = AuthError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("kubernetes") {
            Ok(AuthMethod::Kubernetes)
        } else if s.eq_ignore_ascii_case("userpass") {
            Ok(AuthMethod::Userpass)
        } else {
            Err(AuthError::UnsupportedMethod(s.to_string()))
        }
    }
}

impl fmt::Display for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMethod::Kubernetes => write!(f, "kubernetes"),
            AuthMethod::Userpass => write!(f, "userpass"),
        }
    }
}

/// Whether a login response body reports errors.
///
/// Matches the raw text rather than a parsed `errors` field, so it also
/// catches error payloads from proxies in front of the server.
pub fn is_error_payload(body: &str) -> bool {
    body.contains("errors")
}

#[derive(Deserialize)]
struct LoginResponse {
    auth: Option<LoginAuth>,
}

#[derive(Deserialize)]
struct LoginAuth {
    #[serde(default)]
    client_token: Option<String>,
}

/// Logs in and stores the resulting client token on the configuration.
pub struct Authenticator<'a> {
    transport: &'a dyn Transport,
}

impl<'a> Authenticator<'a> {
    pub fn new(transport: &'a dyn Transport) -> Self {
        Self { transport }
    }

    /// Log in with the method named by `vault.authMethod`.
    ///
    /// Sends exactly one request. On success the token is available through
    /// [`Config::token`]; on failure the configuration is left untouched.
    ///
    /// # Errors
    ///
    /// - `AuthError::UnsupportedMethod` before any request for an unknown method
    /// - `AuthError::Rejected` if the body reports errors, whatever the status
    /// - `AuthError::Http` for any other non-200 status
    /// - `AuthError::TokenExtraction` if a 200 response carries no token
    /// - `TransportError` if no response was received
    pub fn authenticate(&self, config: &mut Config) -> Result<()> {
        let method: AuthMethod = config.vault.auth_method.parse()?;
        let request = login_request(method, config);

        debug!(%method, url = %request.url, "logging in");
        let response = self.transport.send(&request)?;
        let token = extract_token(&response)?;

        config.set_token(token);
        debug!(%method, "login succeeded");
        Ok(())
    }
}

/// Build the login request for a strategy.
pub fn login_request(method: AuthMethod, config: &Config) -> Request {
    let base = [
        config.server(),
        constants::AUTH_API_VERSION,
        "auth",
        config.vault.login_path.as_str(),
        "login",
    ]
    .join("/");

    match method {
        AuthMethod::Kubernetes => Request::post(
            base,
            json!({
                "jwt": config.kube_token.as_str(),
                "role": config.vault.role,
            }),
        ),
        AuthMethod::Userpass => Request::post(
            format!("{}/{}", base, config.username),
            json!({ "password": config.password.as_str() }),
        ),
    }
}

fn extract_token(response: &Response) -> Result<String> {
    let body = response.text();

    if is_error_payload(&body) {
        return Err(AuthError::Rejected(body.into_owned()).into());
    }
    if response.status != 200 {
        return Err(AuthError::Http {
            status: response.status,
        }
        .into());
    }

    let parsed: LoginResponse = serde_json::from_slice(&response.body)
        .map_err(|e| AuthError::TokenExtraction(e.to_string()))?;

    match parsed.auth.and_then(|auth| auth.client_token) {
        Some(token) if !token.is_empty() => Ok(token),
        Some(_) => Err(AuthError::TokenExtraction("auth.client_token is empty".to_string()).into()),
        None => {
            Err(AuthError::TokenExtraction("auth.client_token is missing".to_string()).into())
        }
    }
}
