//! Command-line interface.

pub mod output;
pub mod read;
pub mod write;

use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::core::config::Config;
use crate::core::document::SecretsDocument;
use crate::core::session::Session;
use crate::core::transport::HttpTransport;
use crate::error::Result;

/// vaulttool - read and write secrets in a Vault-compatible secret store.
#[derive(Parser, Debug)]
#[command(
    name = "vaulttool",
    about = "Read and write secrets in a Vault-compatible secret store",
    version
)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, env = "VAULTTOOL_CONFIG", value_name = "PATH")]
    pub config: PathBuf,

    /// YAML file with the mode and values to write
    #[arg(long, value_name = "PATH")]
    pub secrets: Option<PathBuf>,

    /// Write the values from --secrets to the configured secret path
    #[arg(long, requires = "secrets")]
    pub write: bool,

    /// Print the secrets as a JSON object
    #[arg(long, conflicts_with = "write")]
    pub json: bool,

    /// Show debug output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Run the tool: load config, log in, then read or write.
///
/// Both files are loaded before the first request, so a bad config or
/// secrets file fails without touching the network.
pub fn execute(cli: &Cli) -> Result<()> {
    debug!(path = %cli.config.display(), "using config");
    let config = Config::load(&cli.config)?;

    let document = match (&cli.secrets, cli.write) {
        (Some(path), true) => Some(SecretsDocument::load(path)?),
        _ => None,
    };

    let transport = HttpTransport::new(config.timeout());
    let session = Session::open(config, &transport)?;

    match document {
        Some(document) => write::execute(&session, document),
        None => read::execute(&session, cli.json),
    }
}
