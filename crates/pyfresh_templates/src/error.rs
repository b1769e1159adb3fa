//! Error types for template rendering.

use thiserror::Error;

/// Result type alias for template operations.
pub type TemplateResult<T> = Result<T, TemplateError>;

/// Errors that can occur during template rendering.
#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown file type: {0}")]
    UnknownFileType(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}
