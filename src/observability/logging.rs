//! Structured logging setup
//!
//! One global `tracing` subscriber, installed at startup. The format and
//! filter come from the `logging` section of the config file; `RUST_LOG`
//! wins when the config gives no filter.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use super::{ObservabilityError, ObservabilityResult};

/// Filter used when neither the config nor `RUST_LOG` provides one
pub const DEFAULT_FILTER: &str = "info,itemstore=debug,tower_http=info";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Multi-line, human-readable (development)
    Pretty,
    /// Single-line, no colors
    Compact,
    /// One JSON object per line (production)
    Json,
}

#[allow(clippy::derivable_impls)]
impl Default for LogFormat {
    fn default() -> Self {
        #[cfg(debug_assertions)]
        {
            LogFormat::Pretty
        }
        #[cfg(not(debug_assertions))]
        {
            LogFormat::Json
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
            LogFormat::Json => "json",
        };
        write!(f, "{}", name)
    }
}

/// Logging section of the config file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    #[serde(default)]
    pub format: LogFormat,

    /// `EnvFilter` directives, e.g. `"info,itemstore=debug"`
    #[serde(default)]
    pub filter: Option<String>,
}

impl LogConfig {
    /// Resolve the effective filter
    pub fn env_filter(&self) -> ObservabilityResult<EnvFilter> {
        match &self.filter {
            Some(directives) => EnvFilter::try_new(directives)
                .map_err(|e| ObservabilityError::invalid_log_filter(e.to_string())),
            None => Ok(EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
        }
    }
}

/// Install the global subscriber.
///
/// Fails if the filter is invalid or a subscriber is already installed.
pub fn init_logging(config: &LogConfig) -> ObservabilityResult<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_target(true);

    let installed = match config.format {
        LogFormat::Pretty => subscriber.pretty().try_init(),
        LogFormat::Compact => subscriber.compact().try_init(),
        LogFormat::Json => subscriber.json().try_init(),
    };
    installed.map_err(|e| ObservabilityError::subscriber_install_failed(e.to_string()))?;

    tracing::info!(format = %config.format, "logging initialized");
    Ok(())
}
