//! Filter parameter errors

use thiserror::Error;

pub type QueryResult<T> = Result<T, QueryError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum QueryError {
    /// A date bound that is not an ISO-8601 calendar date
    #[error("{bound} invalid: '{value}' is not an ISO-8601 date (YYYY-MM-DD)")]
    InvalidDate { bound: &'static str, value: String },

    /// NaN or infinite price bound
    #[error("{bound} invalid: must be a finite number")]
    InvalidPrice { bound: &'static str },
}
