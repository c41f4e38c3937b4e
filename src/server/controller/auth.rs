use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        auth::{LoginDto, LoginResponseDto, RegisterDto},
    },
    server::{
        error::AppError,
        model::user::{LoginParam, RegisterParam},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping auth endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Register a new account.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Username, email and password
///
/// # Returns
/// - `201 Created` - Account created
/// - `400 Bad Request` - Missing field, or email or username already in use
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = AUTH_TAG,
    request_body = RegisterDto,
    responses(
        (status = 201, description = "Account created", body = MessageDto),
        (status = 400, description = "Invalid or duplicate registration", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, state.config.bcrypt_cost);

    service.register(RegisterParam::from_dto(payload)).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageDto {
            message: "User registered successfully".to_string(),
        }),
    ))
}

/// Log in with email and password.
///
/// # Returns
/// - `200 OK` - Bearer token and the user's id and username
/// - `400 Bad Request` - Wrong password
/// - `404 Not Found` - No account with that email
/// - `500 Internal Server Error` - Database or token error
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = LoginResponseDto),
        (status = 400, description = "Invalid credentials", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AuthService::new(&state.db, &state.tokens, state.config.bcrypt_cost);

    let (token, user) = service.login(LoginParam::from_dto(payload)).await?;

    Ok((
        StatusCode::OK,
        Json(LoginResponseDto {
            token,
            user: user.into_auth_dto(),
        }),
    ))
}
