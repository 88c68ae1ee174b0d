//! Error handling for the Vitro CLI

use std::path::PathBuf;
use thiserror::Error;
use vitro_common::VitroError;
use vitro_config::ConfigError;
use vitro_templating::TemplatingError;

use crate::exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

/// CLI-specific result type
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Common(#[from] VitroError),

    #[error(transparent)]
    Templating(#[from] TemplatingError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The project root does not exist or cannot be resolved
    #[error("Project root {path} is not accessible: {source}")]
    ProjectRoot {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lookup in the experiments tree found nothing
    #[error("{0}")]
    NotFound(String),

    /// An external program could not be started or failed
    #[error("{program} failed: {message}")]
    Process { program: String, message: String },
}

impl CliError {
    /// Exit code for this error
    pub fn exit_code(&self) -> i32 {
        EXIT_ERROR
    }

    /// The message with its source chain
    pub fn full_chain(&self) -> String {
        let mut result = self.to_string();
        let mut current = std::error::Error::source(self);
        while let Some(err) = current {
            let message = err.to_string();
            if !result.contains(&message) {
                result.push_str(&format!("\n  Caused by: {message}"));
            }
            current = err.source();
        }
        result
    }
}

/// Convert a CliResult to an exit code, printing the error chain if needed
pub fn handle_cli_result<T>(result: CliResult<T>) -> i32 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(e) => {
            tracing::debug!("command failed: {:?}", e);
            eprintln!("Error: {}", e.full_chain());
            e.exit_code()
        }
    }
}
