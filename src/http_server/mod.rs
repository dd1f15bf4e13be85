//! # itemstore HTTP Server Module
//!
//! Wraps the item API in an Axum server.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/item/*` - Item CRUD and filtered listing

pub mod config;
pub mod health_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
