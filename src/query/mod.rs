//! # Item Query Engine
//!
//! Translates optional list parameters into a composed predicate over items
//! and applies it to produce an id-ordered result.

pub mod errors;
pub mod filter;
pub mod params;

pub use errors::{QueryError, QueryResult};
pub use filter::{ItemFilter, Predicate, TextField};
pub use params::ListParams;
