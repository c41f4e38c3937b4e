//! HTTP client for the Tippsy API.
//!
//! `ApiClient` wraps a `reqwest::Client` and the server's base URL and exposes one
//! method per endpoint, returning the shared DTOs from `crate::model`. Routes that act
//! on behalf of a user take a `ClientSession`, whose token is sent as a bearer header.
//!
//! # Example
//!
//! ```rust,ignore
//! use tippsy::client::api::ApiClient;
//!
//! let api = ApiClient::new("http://localhost:3000")?;
//! let session = api.login("alice@example.com", "hunter22").await?;
//! let profile = api.get_profile(session.user_id).await?;
//! ```

pub mod api;
pub mod model;
