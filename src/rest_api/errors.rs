//! # REST API Errors
//!
//! Maps every failure of the item pipeline onto an HTTP status and a JSON
//! error body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error};

use crate::query::QueryError;
use crate::schema::SchemaError;
use crate::storage::StorageError;

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

/// REST API errors
#[derive(Debug, Clone, Error)]
pub enum RestError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// Body is not valid JSON or has the wrong field types
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// Path segment could not be decoded (e.g. non-numeric id)
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Query string could not be decoded (e.g. non-numeric price bound)
    #[error("Invalid query parameter: {0}")]
    InvalidQueryParam(String),

    /// Record failed field validation
    #[error("{0}")]
    Validation(#[from] SchemaError),

    /// Filter parameter decoded but invalid
    #[error("{0}")]
    InvalidFilter(#[from] QueryError),

    /// Item does not exist
    #[error("Item not found")]
    NotFound,

    /// Name already used by another item
    #[error("An item named '{0}' already exists")]
    Conflict(String),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Storage backend or runtime failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RestError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            RestError::InvalidBody(_)
            | RestError::InvalidPath(_)
            | RestError::InvalidQueryParam(_)
            | RestError::Validation(_)
            | RestError::InvalidFilter(_)
            | RestError::Conflict(_) => StatusCode::BAD_REQUEST,

            RestError::NotFound => StatusCode::NOT_FOUND,

            RestError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<StorageError> for RestError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(_) => RestError::NotFound,
            StorageError::Conflict(name) => RestError::Conflict(name),
            other => RestError::Internal(other.to_string()),
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl From<&RestError> for ErrorResponse {
    fn from(err: &RestError) -> Self {
        Self {
            code: err.status_code().as_u16(),
            error: err.to_string(),
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "request failed");
        } else {
            debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}
