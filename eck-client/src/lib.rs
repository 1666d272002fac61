//! # ECK Client
//!
//! Startup wiring for the search client: settings from the environment,
//! client construction, the response-logging hook, and the process-wide
//! client handle.

pub mod config;
pub mod global;
pub mod logging;

pub use config::{Dependencies, Settings};

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while bootstrapping the client.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search client error.
    #[error("Client error: {0}")]
    ClientError(#[from] eck_client_repository::ClientError),

    /// The CA bundle could not be read.
    #[error("Failed to read CA certificate {}: {source}", .path.display())]
    CaCertificate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}
