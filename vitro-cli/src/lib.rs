//! Vitro command line interface.
//!
//! The binary in `main.rs` only parses arguments and sets up logging; every
//! command lives in [`commands`] so it can be driven from tests.

pub mod cli;
pub mod commands;
pub mod context;
pub mod error;
pub mod exit_codes;

pub use cli::{Cli, Commands, PackageManagerArg};
pub use context::CommandContext;
pub use error::{handle_cli_result, CliError, CliResult};
