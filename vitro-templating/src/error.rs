//! Error types for template parsing and rendering

use thiserror::Error;

/// Templating errors
#[derive(Error, Debug)]
pub enum TemplatingError {
    /// The template source failed to parse
    #[error("Template parse error: {0}")]
    Parse(String),

    /// Rendering failed, usually because of a missing variable
    #[error("Template render error: {0}")]
    Render(String),
}

/// Result type alias for templating operations
pub type Result<T> = std::result::Result<T, TemplatingError>;
