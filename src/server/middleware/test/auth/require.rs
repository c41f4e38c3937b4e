use super::*;

/// Tests access with a token issued to the acting user.
///
/// Verifies that the guard accepts a valid token whose subject matches the
/// user id being acted for, and returns that subject.
///
/// Expected: Ok(Some(user_id))
#[test]
fn allows_matching_subject() {
    let tokens = TokenService::new("secret", 3600);
    let headers = bearer(&tokens.issue(7).unwrap());

    let result = AuthGuard::new(&tokens, &headers, true).require(&[Permission::ActAs(7)]);

    assert!(matches!(result, Ok(Some(7))));
}

/// Tests access without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_missing_token() {
    let tokens = TokenService::new("secret", 3600);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers, true).require(&[Permission::ActAs(7)]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests access with a non-bearer Authorization scheme.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn rejects_non_bearer_scheme() {
    let tokens = TokenService::new("secret", 3600);
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcjpwYXNz"));

    let result = AuthGuard::new(&tokens, &headers, true).require(&[Permission::ActAs(7)]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests access with a token signed by another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[test]
fn rejects_invalid_token() {
    let tokens = TokenService::new("secret", 3600);
    let other = TokenService::new("other-secret", 3600);
    let headers = bearer(&other.issue(7).unwrap());

    let result = AuthGuard::new(&tokens, &headers, true).require(&[Permission::ActAs(7)]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));
}

/// Tests acting on behalf of a different user.
///
/// Verifies that a valid token for user 7 cannot be used to act as user 8.
///
/// Expected: Err(AuthError::AccessDenied)
#[test]
fn rejects_mismatched_subject() {
    let tokens = TokenService::new("secret", 3600);
    let headers = bearer(&tokens.issue(7).unwrap());

    let result = AuthGuard::new(&tokens, &headers, true).require(&[Permission::ActAs(8)]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied {
            subject: 7,
            user_id: 8
        }))
    ));
}

/// Tests that a disabled guard lets every request through.
///
/// Expected: Ok(None) even without a token
#[test]
fn disabled_guard_allows_everything() {
    let tokens = TokenService::new("secret", 3600);
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&tokens, &headers, false).require(&[Permission::ActAs(7)]);

    assert!(matches!(result, Ok(None)));
}
