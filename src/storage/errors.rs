//! Storage error types
//!
//! Error codes:
//! - ITEMSTORE_ITEM_NOT_FOUND
//! - ITEMSTORE_DUPLICATE_NAME
//! - ITEMSTORE_STORAGE_BACKEND
//! - ITEMSTORE_STORAGE_MIGRATION

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Error)]
pub enum StorageError {
    /// No item with this id
    #[error("Item {0} not found")]
    NotFound(i64),

    /// Another item already uses this name
    #[error("An item named '{0}' already exists")]
    Conflict(String),

    /// Unclassified SQLite failure
    #[error("Storage backend error: {0}")]
    Backend(#[from] rusqlite::Error),

    /// Schema migration could not be applied
    #[error("Migration to version {version} failed: {source}")]
    Migration {
        version: usize,
        #[source]
        source: rusqlite::Error,
    },
}

impl StorageError {
    pub fn code(&self) -> &'static str {
        match self {
            StorageError::NotFound(_) => "ITEMSTORE_ITEM_NOT_FOUND",
            StorageError::Conflict(_) => "ITEMSTORE_DUPLICATE_NAME",
            StorageError::Backend(_) => "ITEMSTORE_STORAGE_BACKEND",
            StorageError::Migration { .. } => "ITEMSTORE_STORAGE_MIGRATION",
        }
    }
}

/// True if a SQLite error is a UNIQUE constraint violation
pub(crate) fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}
