use axum::http::{header::AUTHORIZATION, HeaderMap};

use crate::server::{
    error::{auth::AuthError, AppError},
    service::token::TokenService,
};

pub enum Permission {
    /// The caller must hold a token issued to this user id.
    ActAs(i32),
}

/// Checks bearer tokens on routes that act on behalf of a user.
///
/// When `enabled` is false every requirement passes, which restores fully open routes.
pub struct AuthGuard<'a> {
    tokens: &'a TokenService,
    headers: &'a HeaderMap,
    enabled: bool,
}

impl<'a> AuthGuard<'a> {
    pub fn new(tokens: &'a TokenService, headers: &'a HeaderMap, enabled: bool) -> Self {
        Self {
            tokens,
            headers,
            enabled,
        }
    }

    /// Verifies the request's bearer token against each permission.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - Token valid and every permission satisfied
    /// - `Ok(None)` - Checking is disabled
    /// - `Err(AuthError::MissingToken | InvalidToken)` - No usable token (401)
    /// - `Err(AuthError::AccessDenied)` - Token belongs to another user (403)
    pub fn require(&self, permissions: &[Permission]) -> Result<Option<i32>, AppError> {
        if !self.enabled {
            return Ok(None);
        }

        let Some(token) = bearer_token(self.headers) else {
            return Err(AuthError::MissingToken.into());
        };

        let subject = self.tokens.verify(token)?;

        for permission in permissions {
            match permission {
                Permission::ActAs(user_id) => {
                    if subject != *user_id {
                        return Err(AuthError::AccessDenied {
                            subject,
                            user_id: *user_id,
                        }
                        .into());
                    }
                }
            }
        }

        Ok(Some(subject))
    }
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
