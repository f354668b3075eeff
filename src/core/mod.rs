//! Core library components.
//!
//! This module contains the login strategies, the secret read and write
//! requests, the reconciliation policy and the configuration handling.

pub mod auth;
pub mod config;
pub mod constants;
pub mod document;
pub mod reader;
pub mod reconcile;
pub mod session;
pub mod transport;
pub mod types;
pub mod writer;
