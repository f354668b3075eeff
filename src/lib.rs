//! vaulttool - read and write secrets in a Vault-compatible secret store.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── read          # Print the secrets at the configured path
//! │   ├── write         # Apply a secrets file
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # YAML configuration
//!     ├── document      # Secrets file and reconciliation mode
//!     ├── transport/    # HTTP transport
//!     │   ├── mod       # Transport trait
//!     │   └── http      # ureq implementation
//!     ├── auth          # kubernetes and userpass login
//!     ├── reader        # Fetch secrets
//!     ├── writer        # Submit secrets
//!     ├── reconcile     # UPDATE / WRITE merge policy
//!     └── session       # Login, then read or write
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use vaulttool::core::config::Config;
//! use vaulttool::core::session::Session;
//! use vaulttool::core::transport::HttpTransport;
//!
//! # fn main() -> vaulttool::error::Result<()> {
//! let config = Config::load(Path::new("config.yaml"))?;
//! let transport = HttpTransport::new(config.timeout());
//! let session = Session::open(config, &transport)?;
//! for (key, value) in session.read()? {
//!     println!("{key}: {value}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
