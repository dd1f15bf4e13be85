//! # Item REST API
//!
//! HTTP endpoints for CRUD operations on items, with the status code and
//! error body contract of the service.

pub mod errors;
pub mod server;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use server::{item_routes, ApiState};
