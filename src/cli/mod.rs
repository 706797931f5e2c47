//! CLI module for bookshelf
//!
//! Provides command-line interface for:
//! - init: Create an empty catalog file and static directory
//! - serve: Load the catalog and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, load_config, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
