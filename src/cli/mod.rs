//! CLI module for fileguard
//!
//! Provides command-line interface for:
//! - serve: run the HTTP validation server
//! - validate: one-shot validation of local files

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve, validate, validate_file};
pub use config::Config;
pub use errors::{CliError, CliResult};
pub use io::{write_result, write_result_to};
