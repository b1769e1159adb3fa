//! Error types for project generation.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generation operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur during project generation.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Project directory already exists: {0} (use --force to overwrite)")]
    DirectoryExists(PathBuf),

    #[error("Failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Git error: {0}")]
    Git(String),

    #[error("Configuration error: {0}")]
    Config(#[from] pyfresh_config::ConfigError),

    #[error("Template error: {0}")]
    Template(#[from] pyfresh_templates::TemplateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
