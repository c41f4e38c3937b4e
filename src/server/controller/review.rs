use axum::{
    extract::{multipart::Field, Multipart, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
    model::{
        api::ErrorDto,
        review::{CreateReviewResponseDto, MostReviewedDrinkDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::{CreateReviewParam, DrinkReviewCount, Review, ReviewForm},
        service::{review::ReviewService, upload::PhotoUpload},
        state::AppState,
    },
};

/// Tag for grouping review endpoints in OpenAPI documentation
pub static REVIEW_TAG: &str = "review";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrinkReviewsParams {
    pub drink_id: Option<i32>,
}

/// Multipart fields accepted by `POST /reviews`, for the OpenAPI document.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct CreateReviewForm {
    user_id: i32,
    drink_id: Option<i32>,
    restaurant_id: Option<i32>,
    rating: i32,
    comment: Option<String>,
    impairment_level: Option<i32>,
    #[schema(value_type = Option<String>, format = Binary)]
    photo: Option<Vec<u8>>,
}

/// Create a review of a drink or a restaurant.
///
/// Accepts `multipart/form-data` with text fields `user_id`, `drink_id`, `restaurant_id`,
/// `rating`, `comment`, `impairment_level` and an optional file field `photo`. Exactly
/// one of `drink_id` and `restaurant_id` must be given.
///
/// # Access Control
/// - Bearer token issued to `user_id`
///
/// # Returns
/// - `201 Created` - The created review
/// - `400 Bad Request` - Invalid fields, unknown author or target, or a duplicate
/// - `401 Unauthorized` / `403 Forbidden` - Token missing, invalid, or for another user
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    post,
    path = "/reviews",
    tag = REVIEW_TAG,
    request_body(content = CreateReviewForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Review created", body = CreateReviewResponseDto),
        (status = 400, description = "Invalid review", body = ErrorDto),
        (status = 401, description = "Authentication required", body = ErrorDto),
        (status = 403, description = "Not allowed to act for this user", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut form = ReviewForm::default();
    let mut photo = None;

    while let Some(field) = multipart.next_field().await? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        match name.as_str() {
            "photo" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await?;
                if !bytes.is_empty() {
                    photo = Some(PhotoUpload {
                        file_name,
                        content_type,
                        bytes: bytes.to_vec(),
                    });
                }
            }
            "user_id" => form.user_id = int_field(&name, field).await?,
            "drink_id" => form.drink_id = int_field(&name, field).await?,
            "restaurant_id" => form.restaurant_id = int_field(&name, field).await?,
            "rating" => form.rating = int_field(&name, field).await?,
            "impairment_level" => form.impairment_level = int_field(&name, field).await?,
            "comment" => form.comment = Some(field.text().await?),
            _ => {}
        }
    }

    if let Some(user_id) = form.user_id {
        AuthGuard::new(&state.tokens, &headers, state.config.require_auth)
            .require(&[Permission::ActAs(user_id)])?;
    }

    let param = CreateReviewParam::from_form(form)?;

    let review = ReviewService::new(&state.db)
        .create(param, photo, &state.uploads)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateReviewResponseDto {
            message: "Review created successfully".to_string(),
            review: review.into_dto(),
        }),
    ))
}

/// Reads an optional integer text field; blank values count as absent.
async fn int_field(name: &str, field: Field<'_>) -> Result<Option<i32>, AppError> {
    let text = field.text().await?;
    let text = text.trim();

    if text.is_empty() || text == "null" || text == "undefined" {
        return Ok(None);
    }

    text.parse::<i32>()
        .map(Some)
        .map_err(|_| AppError::BadRequest(format!("{} must be an integer", name)))
}

/// List every review, newest first.
#[utoipa::path(
    get,
    path = "/reviews",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "All reviews newest first", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(reviews))))
}

/// List reviews of one drink, or of every drink when `drinkId` is omitted.
#[utoipa::path(
    get,
    path = "/reviews/drink",
    tag = REVIEW_TAG,
    params(
        ("drinkId" = Option<i32>, Query, description = "Drink id")
    ),
    responses(
        (status = 200, description = "Drink reviews newest first", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_drink_reviews(
    State(state): State<AppState>,
    Query(params): Query<DrinkReviewsParams>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .get_by_drink(params.drink_id)
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(reviews))))
}

/// List reviews of every restaurant.
#[utoipa::path(
    get,
    path = "/reviews/restaurant",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Restaurant reviews newest first", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_restaurant_reviews(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db).get_by_restaurant(None).await?;

    Ok((StatusCode::OK, Json(into_dtos(reviews))))
}

/// List reviews of one restaurant.
#[utoipa::path(
    get,
    path = "/reviews/restaurant/{id}",
    tag = REVIEW_TAG,
    params(
        ("id" = i32, Path, description = "Restaurant id")
    ),
    responses(
        (status = 200, description = "Restaurant reviews newest first", body = Vec<ReviewDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reviews_by_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let reviews = ReviewService::new(&state.db)
        .get_by_restaurant(Some(id))
        .await?;

    Ok((StatusCode::OK, Json(into_dtos(reviews))))
}

/// The five most reviewed drinks.
#[utoipa::path(
    get,
    path = "/reviews/mostReviewedDrinks",
    tag = REVIEW_TAG,
    responses(
        (status = 200, description = "Most reviewed drinks, highest count first", body = Vec<MostReviewedDrinkDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_most_reviewed_drinks(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let drinks = ReviewService::new(&state.db).most_reviewed_drinks().await?;

    let drinks_dto: Vec<MostReviewedDrinkDto> =
        drinks.into_iter().map(DrinkReviewCount::into_dto).collect();

    Ok((StatusCode::OK, Json(drinks_dto)))
}

fn into_dtos(reviews: Vec<Review>) -> Vec<ReviewDto> {
    reviews.into_iter().map(Review::into_dto).collect()
}
