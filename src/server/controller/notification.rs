use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        notification::{MarkReadDto, NotificationDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::notification::Notification,
        service::notification::NotificationService,
        state::AppState,
    },
};

/// Tag for grouping notification endpoints in OpenAPI documentation
pub static NOTIFICATION_TAG: &str = "notification";

/// List a user's notifications, newest first.
///
/// # Access Control
/// - Bearer token issued to user `id`
#[utoipa::path(
    get,
    path = "/users/{id}/notifications",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Notifications newest first", body = Vec<NotificationDto>),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_notifications(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers, state.config.require_auth)
        .require(&[Permission::ActAs(id)])?;

    let notifications = NotificationService::new(&state.db).get_for_user(id).await?;

    let notifications_dto: Vec<NotificationDto> = notifications
        .into_iter()
        .map(Notification::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(notifications_dto)))
}

/// Mark all of a user's notifications as read.
///
/// # Access Control
/// - Bearer token issued to user `id`
#[utoipa::path(
    post,
    path = "/users/{id}/notifications/read",
    tag = NOTIFICATION_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Number of notifications marked read", body = MarkReadDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn mark_notifications_read(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers, state.config.require_auth)
        .require(&[Permission::ActAs(id)])?;

    let updated = NotificationService::new(&state.db).mark_all_read(id).await?;

    Ok((StatusCode::OK, Json(MarkReadDto { updated })))
}
