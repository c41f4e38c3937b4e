use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::client::model::{error::ApiError, session::ClientSession};

pub mod auth;
pub mod helper;
pub mod notification;
pub mod restaurant;
pub mod review;
pub mod search;
pub mod user;

pub use review::ReviewUpload;

/// Typed client for every Tippsy endpoint.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    base: Url,
}

impl ApiClient {
    /// Creates a client for the server at `base_url`, e.g. `http://localhost:3000`.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a client that reuses an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self, ApiError> {
        let mut base = Url::parse(base_url)
            .map_err(|e| ApiError::local(format!("Invalid base URL '{}': {}", base_url, e)))?;

        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        Ok(Self { http, base })
    }

    /// Resolves an API path such as `/users/7` below the base URL, keeping any base path.
    pub(crate) fn url(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|e| ApiError::local(format!("Invalid path '{}': {}", path, e)))
    }

    pub(crate) fn get(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.http.get(self.url(path)?))
    }

    pub(crate) fn post(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.http.post(self.url(path)?))
    }

    pub(crate) fn put(&self, path: &str) -> Result<RequestBuilder, ApiError> {
        Ok(self.http.put(self.url(path)?))
    }

    /// Adds the session's bearer token to a request.
    pub(crate) fn authorized(request: RequestBuilder, session: &ClientSession) -> RequestBuilder {
        request.bearer_auth(&session.token)
    }
}
