//! Item storage
//!
//! SQLite-backed persistence for items: create, point lookup, filtered list,
//! update and delete, with existence and name-uniqueness enforcement.
//!
//! # Invariants
//!
//! - ids are assigned by the database, once, and never reused
//! - names are unique (exact, case-sensitive)
//! - each write is a single-row transaction

mod errors;
mod gateway;
pub mod migrations;

pub use errors::{StorageError, StorageResult};
pub use gateway::ItemGateway;
