//! Error types for Vitro Common
//!
//! This module provides structured error handling for the filesystem-facing
//! operations shared by the Vitro crates: experiment discovery and file
//! output.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Result type alias for Vitro operations
pub type Result<T> = std::result::Result<T, VitroError>;

/// Common error types for Vitro operations
#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum VitroError {
    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A glob pattern could not be compiled
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidGlobPattern {
        /// The offending pattern
        pattern: String,
        /// Why the pattern was rejected
        message: String,
    },

    /// Directory to search does not exist
    #[error("Directory not found: {path}\nSuggestion: {suggestion}")]
    DirectoryNotFound {
        /// The directory that was not found
        path: PathBuf,
        /// Suggestion for fixing the issue
        suggestion: String,
    },

    /// Failed to read a file
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failed to write a file
    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl VitroError {
    /// Create an InvalidGlobPattern error.
    pub fn invalid_glob(pattern: impl Into<String>, message: impl ToString) -> Self {
        Self::InvalidGlobPattern {
            pattern: pattern.into(),
            message: message.to_string(),
        }
    }

    /// Create a FileRead error.
    pub fn file_read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileRead {
            path: path.into(),
            source,
        }
    }

    /// Create a FileWrite error.
    pub fn file_write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileWrite {
            path: path.into(),
            source,
        }
    }
}
