//! CLI command implementations
//!
//! `init` prepares a fresh installation; `serve` boots logging, storage and
//! the HTTP server, in that order.

use std::fs;
use std::path::Path;

use tracing::info;

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use crate::http_server::HttpServer;
use crate::observability::init_logging;
use crate::storage::ItemGateway;

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config).map(|_| ()),
        Command::Serve { config, port } => serve(&config, port),
    }
}

/// Write a default config file and create the database it points at.
///
/// Refuses to overwrite an existing config file.
pub fn init(config_path: &Path) -> CliResult<Config> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path));
    }

    let config = Config::default();
    fs::write(config_path, serde_json::to_string_pretty(&config)?)?;

    let gateway = ItemGateway::open(&config.database_path, config.busy_timeout())?;
    println!(
        "Initialized {} (database: {})",
        config_path.display(),
        gateway.path().display()
    );

    Ok(config)
}

/// Boot and serve until interrupted
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port {
        config.http.port = port;
    }

    init_logging(&config.logging)?;
    info!(config = %config_path.display(), "configuration loaded");

    let gateway = ItemGateway::open(&config.database_path, config.busy_timeout())?;
    info!(database = %gateway.path().display(), "item database opened");

    let server = HttpServer::new(config.http, gateway);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::errors::CliErrorCode;
    use tempfile::TempDir;

    #[test]
    fn test_init_refuses_existing_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("itemstore.json");
        fs::write(&path, "{}").unwrap();

        let err = init(&path).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::AlreadyInitialized);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn test_serve_missing_config_fails_before_boot() {
        let tmp = TempDir::new().unwrap();
        let err = serve(&tmp.path().join("missing.json"), None).unwrap_err();
        assert_eq!(err.code(), &CliErrorCode::ConfigError);
    }
}
