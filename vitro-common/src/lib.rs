//! # Vitro Common
//!
//! Foundational types and utilities shared across the Vitro crates.
//!
//! ## Modules
//!
//! - [`error`] - Structured error types carrying paths and suggestions
//! - [`discovery`] - Glob based experiment file discovery with gitignore support
//! - [`fs_utils`] - File output helpers for the generated preview app
//! - [`logging`] - Formatting helpers for tracing output

pub mod discovery;
pub mod error;
pub mod fs_utils;
pub mod logging;

pub use discovery::{discover_experiments, DiscoveryConfig, MAX_FILES};
pub use error::{Result, VitroError};
pub use fs_utils::{read_file, write_file, write_file_if, WriteOutcome};
pub use logging::Pretty;
