//! vaulttool - read and write secrets in a Vault-compatible secret store.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use vaulttool::cli::output;
use vaulttool::cli::{execute, Cli};
use vaulttool::core::constants;
use vaulttool::error::{AuthError, ConfigError, Error, SecretError, TransportError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("vaulttool=debug")
        } else {
            EnvFilter::new("vaulttool=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(&cli) {
        let suggestion = match &e {
            Error::Config(ConfigError::ReadFile { .. }) => {
                Some("check that the file exists and is readable")
            }
            Error::Auth(AuthError::UnsupportedMethod(_)) => {
                Some("set vault.authMethod to kubernetes or userpass")
            }
            Error::Auth(AuthError::Rejected(_)) | Error::Auth(AuthError::Http { .. }) => {
                Some("check the credentials, role and vault.loginPath in the config file")
            }
            Error::Secret(SecretError::FetchFailed { status: 403 })
            | Error::Secret(SecretError::WriteRejected { status: 403, .. }) => {
                Some("the token's policies do not allow access to vault.secretPath")
            }
            Error::Transport(TransportError::Request { .. }) => {
                Some("check vault.server and that the server is reachable")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
