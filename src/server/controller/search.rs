use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{api::ErrorDto, drink::DrinkDto, drink::NameDto, restaurant::RestaurantDto, user::UserSummaryDto},
    server::{
        error::AppError,
        model::{
            drink::{Drink, NamedItem},
            restaurant::Restaurant,
            user::User,
        },
        service::search::SearchService,
        state::AppState,
    },
};

/// Tag for grouping search endpoints in OpenAPI documentation
pub static SEARCH_TAG: &str = "search";

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Deserialize)]
pub struct UserSearchParams {
    pub username: Option<String>,
}

/// Search drinks by name or category.
#[utoipa::path(
    get,
    path = "/search/drinks",
    tag = SEARCH_TAG,
    params(
        ("query" = String, Query, description = "Case-insensitive substring")
    ),
    responses(
        (status = 200, description = "Matching drinks", body = Vec<DrinkDto>),
        (status = 400, description = "Missing query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_drinks(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let drinks = SearchService::new(&state.db)
        .drinks(params.query.as_deref())
        .await?;

    let drinks_dto: Vec<DrinkDto> = drinks.into_iter().map(Drink::into_dto).collect();

    Ok((StatusCode::OK, Json(drinks_dto)))
}

/// Search restaurants by name.
#[utoipa::path(
    get,
    path = "/search/restaurants",
    tag = SEARCH_TAG,
    params(
        ("query" = String, Query, description = "Case-insensitive substring")
    ),
    responses(
        (status = 200, description = "Matching restaurants", body = Vec<RestaurantDto>),
        (status = 400, description = "Missing query", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_restaurants(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let restaurants = SearchService::new(&state.db)
        .restaurants(params.query.as_deref())
        .await?;

    let restaurants_dto: Vec<RestaurantDto> =
        restaurants.into_iter().map(Restaurant::into_dto).collect();

    Ok((StatusCode::OK, Json(restaurants_dto)))
}

/// Search users by username.
#[utoipa::path(
    get,
    path = "/search/users",
    tag = SEARCH_TAG,
    params(
        ("username" = String, Query, description = "Case-insensitive substring")
    ),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserSummaryDto>),
        (status = 400, description = "Missing username", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(params): Query<UserSearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let users = SearchService::new(&state.db)
        .users(params.username.as_deref())
        .await?;

    let users_dto: Vec<UserSummaryDto> = users.into_iter().map(User::into_summary_dto).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

/// Every drink as id and name.
#[utoipa::path(
    get,
    path = "/search/allDrinks",
    tag = SEARCH_TAG,
    responses(
        (status = 200, description = "All drinks ordered by name", body = Vec<NameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_drinks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let drinks = SearchService::new(&state.db).all_drinks().await?;

    let drinks_dto: Vec<NameDto> = drinks.into_iter().map(NamedItem::into_dto).collect();

    Ok((StatusCode::OK, Json(drinks_dto)))
}

/// Every restaurant as id and name.
#[utoipa::path(
    get,
    path = "/search/allRestaurants",
    tag = SEARCH_TAG,
    responses(
        (status = 200, description = "All restaurants ordered by name", body = Vec<NameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_restaurants(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let restaurants = SearchService::new(&state.db).all_restaurants().await?;

    let restaurants_dto: Vec<NameDto> =
        restaurants.into_iter().map(NamedItem::into_dto).collect();

    Ok((StatusCode::OK, Json(restaurants_dto)))
}
