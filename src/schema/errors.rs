//! Schema validation errors
//!
//! Every variant is a client error: the record is rejected before any
//! storage operation runs.

use thiserror::Error;

/// Result type for validation
pub type SchemaResult<T> = Result<T, SchemaError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    /// Required field absent (or null)
    #[error("field '{0}' is required")]
    MissingField(&'static str),

    /// String longer than its declared maximum
    #[error("field '{field}' must be at most {max} characters (got {actual})")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    /// Numeric field below zero
    #[error("field '{field}' must be greater than or equal to 0 (got {value})")]
    Negative { field: &'static str, value: f64 },

    /// NaN or infinity
    #[error("field '{0}' must be a finite number")]
    NotFinite(&'static str),
}

impl SchemaError {
    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            SchemaError::MissingField(field) | SchemaError::NotFinite(field) => field,
            SchemaError::TooLong { field, .. } | SchemaError::Negative { field, .. } => field,
        }
    }
}
