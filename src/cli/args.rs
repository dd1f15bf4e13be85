//! CLI argument definitions using clap
//!
//! Commands:
//! - itemstore init --config <path>
//! - itemstore serve --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// itemstore - a small item catalog REST API
#[derive(Parser, Debug)]
#[command(name = "itemstore")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file and create the item database
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./itemstore.json")]
        config: PathBuf,
    },

    /// Serve the item API over HTTP
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./itemstore.json")]
        config: PathBuf,

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["itemstore", "serve"]).unwrap();
        match cli.command {
            Command::Serve { config, port } => {
                assert_eq!(config, PathBuf::from("./itemstore.json"));
                assert_eq!(port, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_serve_port_override() {
        let cli =
            Cli::try_parse_from(["itemstore", "serve", "--config", "x.json", "--port", "9000"])
                .unwrap();
        assert!(matches!(
            cli.command,
            Command::Serve { port: Some(9000), .. }
        ));
    }

    #[test]
    fn test_init_requires_no_port() {
        assert!(Cli::try_parse_from(["itemstore", "init", "--port", "1"]).is_err());
    }
}
