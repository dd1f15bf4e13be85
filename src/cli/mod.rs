//! CLI module for itemstore
//!
//! Provides command-line interface for:
//! - init: Write a default config and create the database
//! - serve: Start the item API

mod args;
mod commands;
mod config;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, serve};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
