//! Error types.
//!
//! Every failure in the workflow is a typed value. Nothing below the binary
//! entry point terminates the process; `main` decides how to report and exit.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Secret(#[from] SecretError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Configuration and secrets file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("missing required config field: {field}")]
    MissingField { field: &'static str },
}

/// Login errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("unsupported login method: {0}")]
    UnsupportedMethod(String),

    #[error("login failed: status code {status} returned")]
    Http { status: u16 },

    #[error("login rejected: {0}")]
    Rejected(String),

    #[error("could not extract client token: {0}")]
    TokenExtraction(String),

    #[error("no client token available, login first")]
    NotAuthenticated,
}

/// Secret read and write errors.
#[derive(Error, Debug)]
pub enum SecretError {
    #[error("failed to fetch secrets: status code {status} returned")]
    FetchFailed { status: u16 },

    #[error("malformed secret response: {0}")]
    MalformedResponse(String),

    #[error("write rejected: status code {status} returned: {body}")]
    WriteRejected { status: u16, body: String },

    #[error("failed to encode secrets: {0}")]
    Encode(#[from] serde_json::Error),
}

/// HTTP transport errors.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("failed to read response from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("response from {url} exceeds {limit} bytes")]
    TooLarge { url: String, limit: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
