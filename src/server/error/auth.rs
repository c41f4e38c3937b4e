use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no `Authorization: Bearer` header.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token failed signature, format, or expiry validation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(String),

    /// The token is valid but was issued to a different user than the one being acted for.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {subject} attempted to act on behalf of user {user_id}")]
    AccessDenied { subject: i32, user_id: i32 },
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly messages:
/// - `MissingToken` / `InvalidToken` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
///
/// All errors are logged at debug level while the client-facing messages stay generic.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::MissingToken | Self::InvalidToken(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("Authentication required")),
            )
                .into_response(),
            Self::AccessDenied { .. } => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto::new("Not allowed to act on behalf of this user")),
            )
                .into_response(),
        }
    }
}
