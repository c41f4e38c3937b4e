//! Restaurant domain models and the nearby-search parameters.

use crate::{
    model::restaurant::{GeoPointDto, NearbyRestaurantDto, RestaurantDetailDto, RestaurantDto},
    server::{
        error::AppError,
        model::{drink::Drink, review::Review},
    },
};

/// Mean Earth radius used by the haversine formula.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Search radius applied when the request does not give one.
pub const DEFAULT_NEARBY_RADIUS_KM: f64 = 5.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: i32,
    pub name: String,
    pub longitude: f64,
    pub latitude: f64,
}

impl Restaurant {
    pub fn from_entity(entity: entity::restaurant::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            longitude: entity.longitude,
            latitude: entity.latitude,
        }
    }

    /// Great-circle distance in kilometres from this restaurant to a point.
    pub fn distance_km(&self, longitude: f64, latitude: f64) -> f64 {
        haversine_km(self.longitude, self.latitude, longitude, latitude)
    }

    pub fn into_dto(self) -> RestaurantDto {
        RestaurantDto {
            id: self.id,
            name: self.name,
            location: GeoPointDto::point(self.longitude, self.latitude),
        }
    }
}

/// Restaurant page: the restaurant, its menu, and its reviews.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantDetail {
    pub restaurant: Restaurant,
    /// Mean rating rounded to one decimal, `None` without reviews.
    pub average_rating: Option<f64>,
    pub total_reviews: u64,
    pub drinks: Vec<Drink>,
    /// Reviews of the restaurant, newest first.
    pub reviews: Vec<Review>,
}

impl RestaurantDetail {
    pub fn into_dto(self) -> RestaurantDetailDto {
        RestaurantDetailDto {
            id: self.restaurant.id,
            name: self.restaurant.name,
            location: GeoPointDto::point(self.restaurant.longitude, self.restaurant.latitude),
            average_rating: self.average_rating,
            total_reviews: self.total_reviews,
            drinks: self.drinks.into_iter().map(Drink::into_dto).collect(),
            reviews: self.reviews.into_iter().map(Review::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NearbyRestaurant {
    pub restaurant: Restaurant,
    pub distance_km: f64,
}

impl NearbyRestaurant {
    pub fn into_dto(self) -> NearbyRestaurantDto {
        NearbyRestaurantDto {
            id: self.restaurant.id,
            name: self.restaurant.name,
            location: GeoPointDto::point(self.restaurant.longitude, self.restaurant.latitude),
            distance_km: self.distance_km,
        }
    }
}

/// Validated centre and radius of a nearby search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyParam {
    pub longitude: f64,
    pub latitude: f64,
    pub radius_km: f64,
}

impl NearbyParam {
    /// # Returns
    /// - `Ok(NearbyParam)` - Coordinates within range and a positive radius
    /// - `Err(AppError::BadRequest)` - Any value out of range or not finite
    pub fn new(longitude: f64, latitude: f64, radius_km: Option<f64>) -> Result<Self, AppError> {
        let radius_km = radius_km.unwrap_or(DEFAULT_NEARBY_RADIUS_KM);

        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(AppError::BadRequest(
                "longitude must be between -180 and 180".to_string(),
            ));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(AppError::BadRequest(
                "latitude must be between -90 and 90".to_string(),
            ));
        }
        if !radius_km.is_finite() || radius_km <= 0.0 {
            return Err(AppError::BadRequest("radiusKm must be positive".to_string()));
        }

        Ok(Self {
            longitude,
            latitude,
            radius_km,
        })
    }
}

/// Haversine distance in kilometres between two longitude/latitude points.
pub fn haversine_km(lon1: f64, lat1: f64, lon2: f64, lat2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_distance_for_same_point() {
        assert!(haversine_km(-73.98, 40.75, -73.98, 40.75).abs() < 1e-9);
    }

    #[test]
    fn one_degree_of_latitude_is_about_111_km() {
        let distance = haversine_km(0.0, 0.0, 0.0, 1.0);
        assert!((distance - 111.19).abs() < 0.1, "got {}", distance);
    }

    #[test]
    fn matches_known_city_distance() {
        // Paris to London
        let distance = haversine_km(2.3522, 48.8566, -0.1276, 51.5072);
        assert!((distance - 343.5).abs() < 2.0, "got {}", distance);
    }

    #[test]
    fn nearby_param_defaults_radius() {
        let param = NearbyParam::new(10.0, 20.0, None).unwrap();
        assert_eq!(param.radius_km, DEFAULT_NEARBY_RADIUS_KM);
    }

    #[test]
    fn nearby_param_rejects_out_of_range_values() {
        assert!(NearbyParam::new(181.0, 0.0, None).is_err());
        assert!(NearbyParam::new(0.0, -91.0, None).is_err());
        assert!(NearbyParam::new(0.0, 0.0, Some(0.0)).is_err());
        assert!(NearbyParam::new(f64::NAN, 0.0, None).is_err());
    }
}
