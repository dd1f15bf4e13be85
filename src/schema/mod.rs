//! Item schema and boundary validation
//!
//! Defines the Item shape as exchanged over the API and enforces the
//! field-level constraints before anything reaches storage.

mod errors;
mod types;
mod validator;

pub use errors::{SchemaError, SchemaResult};
pub use types::{parse_iso_date, Item, ItemData, ItemPayload, MAX_NAME_LENGTH};
pub use validator::ItemValidator;
