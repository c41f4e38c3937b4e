use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::{drink::DrinkDto, review::ReviewDto};

/// GeoJSON point; `coordinates` is `[longitude, latitude]`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct GeoPointDto {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: [f64; 2],
}

impl GeoPointDto {
    pub fn point(longitude: f64, latitude: f64) -> Self {
        Self {
            kind: "Point".to_string(),
            coordinates: [longitude, latitude],
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub id: i32,
    pub name: String,
    pub location: GeoPointDto,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetailDto {
    pub id: i32,
    pub name: String,
    pub location: GeoPointDto,
    /// Mean rating rounded to one decimal, `null` without reviews.
    pub average_rating: Option<f64>,
    pub total_reviews: u64,
    pub drinks: Vec<DrinkDto>,
    pub reviews: Vec<ReviewDto>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NearbyRestaurantDto {
    pub id: i32,
    pub name: String,
    pub location: GeoPointDto,
    pub distance_km: f64,
}
