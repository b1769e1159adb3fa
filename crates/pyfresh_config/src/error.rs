//! Error types for configuration handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while loading or querying configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Invalid configuration value: {0}")]
    Invalid(#[from] serde_yaml::Error),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
