//! Error types for the ratebook CLI.

use rates_core::types::RateError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::output::OutputFormat;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid calculation input
    #[error("Invalid input: {0}")]
    Rate(#[from] RateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output format not offered by the command
    #[error("Format `{format}` is not supported by `{command}`")]
    UnsupportedFormat {
        /// Subcommand name
        command: &'static str,
        /// Requested format
        format: OutputFormat,
    },

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
