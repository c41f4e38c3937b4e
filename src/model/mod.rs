//! JSON data transfer objects shared by the server and the client.
//!
//! Every request and response body crosses the wire in camelCase. The server
//! derives OpenAPI schemas for these types when the `server` feature is on.

pub mod api;
pub mod auth;
pub mod drink;
pub mod notification;
pub mod restaurant;
pub mod review;
pub mod user;
