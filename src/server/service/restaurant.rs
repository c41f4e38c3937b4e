//! Restaurant pages and nearby search.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{drink::DrinkRepository, restaurant::RestaurantRepository, review::ReviewRepository},
    error::AppError,
    model::restaurant::{NearbyParam, NearbyRestaurant, RestaurantDetail},
};

pub struct RestaurantService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> RestaurantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads a restaurant by exact name with its menu, rating and reviews.
    ///
    /// # Returns
    /// - `Ok(RestaurantDetail)` - Restaurant page; `average_rating` rounded to one decimal
    /// - `Err(AppError::NotFound)` - No restaurant with that name
    pub async fn get_by_name(&self, name: &str) -> Result<RestaurantDetail, AppError> {
        let Some(restaurant) = RestaurantRepository::new(self.db)
            .find_by_name(name)
            .await?
        else {
            return Err(AppError::NotFound("Restaurant not found".to_string()));
        };

        let review_repo = ReviewRepository::new(self.db);

        let drinks = DrinkRepository::new(self.db)
            .find_by_restaurant(restaurant.id)
            .await?;
        let reviews = review_repo.get_by_restaurant(Some(restaurant.id)).await?;
        let (average, total_reviews) = review_repo.restaurant_rating(restaurant.id).await?;

        Ok(RestaurantDetail {
            restaurant,
            average_rating: average.map(round_one_decimal),
            total_reviews,
            drinks,
            reviews,
        })
    }

    /// Restaurants within `param.radius_km` of a point, nearest first.
    pub async fn nearby(&self, param: NearbyParam) -> Result<Vec<NearbyRestaurant>, AppError> {
        let restaurants = RestaurantRepository::new(self.db).get_all().await?;

        let mut nearby: Vec<NearbyRestaurant> = restaurants
            .into_iter()
            .map(|restaurant| {
                let distance_km = restaurant.distance_km(param.longitude, param.latitude);
                NearbyRestaurant {
                    restaurant,
                    distance_km,
                }
            })
            .filter(|r| r.distance_km <= param.radius_km)
            .collect();

        nearby.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        Ok(nearby)
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
