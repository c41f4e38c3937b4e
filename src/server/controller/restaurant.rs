use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        restaurant::{NearbyRestaurantDto, RestaurantDetailDto},
    },
    server::{
        error::AppError,
        model::restaurant::{NearbyParam, NearbyRestaurant},
        service::restaurant::RestaurantService,
        state::AppState,
    },
};

/// Tag for grouping restaurant endpoints in OpenAPI documentation
pub static RESTAURANT_TAG: &str = "restaurant";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyParams {
    pub longitude: f64,
    pub latitude: f64,
    pub radius_km: Option<f64>,
}

/// Get a restaurant page by exact name.
#[utoipa::path(
    get,
    path = "/restaurants/name/{name}",
    tag = RESTAURANT_TAG,
    params(
        ("name" = String, Path, description = "Restaurant name")
    ),
    responses(
        (status = 200, description = "Restaurant with drinks, rating and reviews", body = RestaurantDetailDto),
        (status = 404, description = "Restaurant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let restaurant = RestaurantService::new(&state.db).get_by_name(&name).await?;

    Ok((StatusCode::OK, Json(restaurant.into_dto())))
}

/// Restaurants near a point, nearest first.
#[utoipa::path(
    get,
    path = "/restaurants/nearby",
    tag = RESTAURANT_TAG,
    params(
        ("longitude" = f64, Query, description = "Longitude in degrees"),
        ("latitude" = f64, Query, description = "Latitude in degrees"),
        ("radiusKm" = Option<f64>, Query, description = "Search radius in kilometres, default 5")
    ),
    responses(
        (status = 200, description = "Restaurants within the radius", body = Vec<NearbyRestaurantDto>),
        (status = 400, description = "Coordinates or radius out of range", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_nearby_restaurants(
    State(state): State<AppState>,
    Query(params): Query<NearbyParams>,
) -> Result<impl IntoResponse, AppError> {
    let param = NearbyParam::new(params.longitude, params.latitude, params.radius_km)?;

    let restaurants = RestaurantService::new(&state.db).nearby(param).await?;

    let restaurants_dto: Vec<NearbyRestaurantDto> = restaurants
        .into_iter()
        .map(NearbyRestaurant::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(restaurants_dto)))
}
