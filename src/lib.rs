//! itemstore - a small item catalog REST API backed by SQLite
//!
//! Requests flow through three layers:
//! - `schema`: validates inbound item payloads
//! - `query`: turns list parameters into a composed item filter
//! - `storage`: persists items and enforces id and name invariants
//!
//! `rest_api` and `http_server` expose them over HTTP; `cli` boots the
//! process.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod query;
pub mod rest_api;
pub mod schema;
pub mod storage;
