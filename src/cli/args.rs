//! CLI argument definitions using clap
//!
//! Commands:
//! - fileguard serve [--config <path>] [--port <port>]
//! - fileguard validate --file <csv> --schema <json> [--pretty]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fileguard - Validate CSV files against a declarative schema
#[derive(Parser, Debug)]
#[command(name = "fileguard")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP validation server
    Serve {
        /// Path to configuration file (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding the configuration file
        #[arg(long)]
        port: Option<u16>,
    },

    /// Validate one CSV file and print the verdict as JSON
    Validate {
        /// CSV file to validate
        #[arg(long)]
        file: PathBuf,

        /// Schema JSON file
        #[arg(long)]
        schema: PathBuf,

        /// Pretty-print the verdict
        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
