//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Application configuration
//! - Token service for signing and verifying bearer tokens
//! - Upload storage for review photos

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    service::{token::TokenService, upload::UploadService},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone: `DatabaseConnection` is a pool handle and the
/// remaining fields are reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Configuration loaded at startup.
    pub config: Arc<Config>,

    /// Signs login tokens and verifies bearer tokens on acting routes.
    pub tokens: Arc<TokenService>,

    /// Writes uploaded review photos to the upload directory.
    pub uploads: Arc<UploadService>,
}

impl AppState {
    /// Creates a new application state from the database and configuration.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `config` - Application configuration
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(db: DatabaseConnection, config: Config) -> Self {
        let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_seconds);
        let uploads = UploadService::new(config.upload_dir.clone());

        Self {
            db,
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            uploads: Arc::new(uploads),
        }
    }
}
