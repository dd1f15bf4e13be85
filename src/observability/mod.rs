//! Observability for itemstore
//!
//! Structured logging through `tracing`, plus the span attached to every HTTP
//! request.
//!
//! # Usage
//!
//! ```ignore
//! use itemstore::observability::{init_logging, LogConfig};
//!
//! init_logging(&LogConfig::default())?;
//! tracing::info!(port = 8000, "listening");
//! ```

mod logging;

pub use logging::{init_logging, LogConfig, LogFormat, DEFAULT_FILTER};

use std::fmt;

use axum::http::Request;
use tracing::Span;
use uuid::Uuid;

/// Observability error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservabilityErrorCode {
    /// Log filter directives could not be parsed
    InvalidLogFilter,
    /// A global subscriber was already installed
    SubscriberInstallFailed,
}

impl ObservabilityErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObservabilityErrorCode::InvalidLogFilter => "ITEMSTORE_INVALID_LOG_FILTER",
            ObservabilityErrorCode::SubscriberInstallFailed => {
                "ITEMSTORE_SUBSCRIBER_INSTALL_FAILED"
            }
        }
    }
}

impl fmt::Display for ObservabilityErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Observability error
#[derive(Debug)]
pub struct ObservabilityError {
    code: ObservabilityErrorCode,
    message: String,
}

impl ObservabilityError {
    pub fn new(code: ObservabilityErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn invalid_log_filter(message: impl Into<String>) -> Self {
        Self::new(ObservabilityErrorCode::InvalidLogFilter, message)
    }

    pub fn subscriber_install_failed(message: impl Into<String>) -> Self {
        Self::new(ObservabilityErrorCode::SubscriberInstallFailed, message)
    }

    pub fn code(&self) -> ObservabilityErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ObservabilityError {}

/// Result type for observability operations
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;

/// Span for one HTTP request, tagged with a fresh request id
pub fn http_request_span<B>(request: &Request<B>) -> Span {
    tracing::info_span!(
        "http_request",
        request_id = %Uuid::new_v4(),
        method = %request.method(),
        path = %request.uri().path(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ObservabilityError::invalid_log_filter("bad filter");
        assert_eq!(err.code(), ObservabilityErrorCode::InvalidLogFilter);
        assert_eq!(err.message(), "bad filter");
        assert_eq!(err.to_string(), "ITEMSTORE_INVALID_LOG_FILTER: bad filter");

        let err = ObservabilityError::subscriber_install_failed("already set");
        assert_eq!(err.code(), ObservabilityErrorCode::SubscriberInstallFailed);
    }

    #[test]
    fn test_http_request_span_builds_without_subscriber() {
        let request = Request::builder()
            .method("GET")
            .uri("/item/?name=widg")
            .body(())
            .unwrap();
        let _span = http_request_span(&request);
    }
}
