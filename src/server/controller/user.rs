use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        review::ReviewDto,
        user::{FollowDto, ProfileDto, TopUserDto, UpdateProfileDto, UserSummaryDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            review::Review,
            user::{TopUser, UpdateProfileParam, User},
        },
        service::{follow::FollowService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// Get the users with the most reviews.
///
/// # Returns
/// - `200 OK` - Up to ten users, most reviews first
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/topUsers",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Top reviewers", body = Vec<TopUserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).top_users().await?;

    let users_dto: Vec<TopUserDto> = users.into_iter().map(TopUser::into_dto).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Get a user's profile.
///
/// # Returns
/// - `200 OK` - Profile with preferences, followers, following and reviews
/// - `404 Not Found` - No such user
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "User profile", body = ProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let profile = UserService::new(&state.db).get_profile(id).await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Update a user's profile.
///
/// # Access Control
/// - Bearer token issued to user `id`
///
/// # Returns
/// - `200 OK` - The updated profile
/// - `400 Bad Request` - Username empty or already taken
/// - `401 Unauthorized` - Missing or invalid token
/// - `403 Forbidden` - Token issued to another user
/// - `404 Not Found` - No such user, or unknown preference name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    request_body = UpdateProfileDto,
    responses(
        (status = 200, description = "Updated profile", body = ProfileDto),
        (status = 400, description = "Invalid update", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this user", body = ErrorDto),
        (status = 404, description = "User or preference not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProfileDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers, state.config.require_auth)
        .require(&[Permission::ActAs(id)])?;

    let profile = UserService::new(&state.db)
        .update_profile(UpdateProfileParam::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(profile.into_dto())))
}

/// Follow another user.
///
/// # Access Control
/// - Bearer token issued to user `id`
///
/// # Returns
/// - `200 OK` - Now following
/// - `400 Bad Request` - Following yourself or already following
/// - `401 Unauthorized` / `403 Forbidden` - Token missing, invalid, or for another user
/// - `404 Not Found` - Either user does not exist
#[utoipa::path(
    post,
    path = "/users/{id}/follow",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Id of the user who follows")
    ),
    request_body = FollowDto,
    responses(
        (status = 200, description = "Now following", body = MessageDto),
        (status = 400, description = "Cannot follow", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this user", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn follow(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<FollowDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers, state.config.require_auth)
        .require(&[Permission::ActAs(id)])?;

    FollowService::new(&state.db)
        .follow(id, payload.target_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User followed successfully".to_string(),
        }),
    ))
}

/// Stop following another user.
///
/// # Access Control
/// - Bearer token issued to user `id`
///
/// # Returns
/// - `200 OK` - No longer following
/// - `400 Bad Request` - Was not following
/// - `401 Unauthorized` / `403 Forbidden` - Token missing, invalid, or for another user
#[utoipa::path(
    post,
    path = "/users/{id}/unfollow",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "Id of the user who unfollows")
    ),
    request_body = FollowDto,
    responses(
        (status = 200, description = "No longer following", body = MessageDto),
        (status = 400, description = "Not following", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn unfollow(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<FollowDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.tokens, &headers, state.config.require_auth)
        .require(&[Permission::ActAs(id)])?;

    FollowService::new(&state.db)
        .unfollow(id, payload.target_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "User unfollowed successfully".to_string(),
        }),
    ))
}

/// List a user's followers.
#[utoipa::path(
    get,
    path = "/users/{id}/followers",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Followers ordered by username", body = Vec<UserSummaryDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_followers(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let users = FollowService::new(&state.db).followers(id).await?;

    let users_dto: Vec<UserSummaryDto> = users.into_iter().map(User::into_summary_dto).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// List the users a user follows.
#[utoipa::path(
    get,
    path = "/users/{id}/following",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Followed users ordered by username", body = Vec<UserSummaryDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_following(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let users = FollowService::new(&state.db).following(id).await?;

    let users_dto: Vec<UserSummaryDto> = users.into_iter().map(User::into_summary_dto).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Reviews by the users that a user follows, newest first.
#[utoipa::path(
    get,
    path = "/users/{id}/following/reviews",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Feed of followed users' reviews", body = Vec<ReviewDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_following_reviews(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = FollowService::new(&state.db).following_reviews(id).await?;

    let reviews_dto: Vec<ReviewDto> = reviews.into_iter().map(Review::into_dto).collect();

    Ok((StatusCode::OK, Json(reviews_dto)))
}
