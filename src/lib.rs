//! Tippsy backend and client library.
//!
//! - `model` holds the JSON DTOs shared by both sides.
//! - `server` (feature `server`) is the axum REST API over SQLite.
//! - `client` (feature `client`) is a typed reqwest client for that API.

pub mod model;

#[cfg(feature = "client")]
pub mod client;

#[cfg(feature = "server")]
pub mod server;
