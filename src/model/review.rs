use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct ReviewAuthorDto {
    pub id: i32,
    pub username: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: i32,
    pub user: ReviewAuthorDto,
    pub drink_id: Option<i32>,
    pub drink_name: Option<String>,
    pub restaurant_id: Option<i32>,
    pub restaurant_name: Option<String>,
    pub rating: i32,
    pub comment: String,
    pub impairment_level: Option<i32>,
    pub photo_url: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct CreateReviewResponseDto {
    pub message: String,
    pub review: ReviewDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct DrinkReviewCountDto {
    pub name: String,
    pub total_reviews: u64,
}

/// One entry of the most-reviewed drinks ranking.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MostReviewedDrinkDto {
    pub drink: DrinkReviewCountDto,
}
