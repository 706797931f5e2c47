//! CLI argument definitions using clap
//!
//! Commands:
//! - bookshelf init --config <path>
//! - bookshelf serve --config <path> [--host <host>] [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Bookshelf - a book catalog HTTP service
#[derive(Parser, Debug)]
#[command(name = "bookshelf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create an empty catalog file and the static asset directory
    Init {
        /// Path to configuration file (optional; defaults apply if absent)
        #[arg(long, default_value = "./bookshelf.json")]
        config: PathBuf,
    },

    /// Load the catalog and serve the HTTP API
    Serve {
        /// Path to configuration file (optional; defaults apply if absent)
        #[arg(long, default_value = "./bookshelf.json")]
        config: PathBuf,

        /// Override the configured bind host
        #[arg(long)]
        host: Option<String>,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
