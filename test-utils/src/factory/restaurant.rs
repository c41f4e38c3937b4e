//! Restaurant factory for creating test restaurant entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test restaurants with customizable fields.
///
/// Drinks passed to `serves` are linked through the `restaurant_drink` table
/// after the restaurant row is inserted.
pub struct RestaurantFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    longitude: f64,
    latitude: f64,
    drink_ids: Vec<i32>,
}

impl<'a> RestaurantFactory<'a> {
    /// Creates a new RestaurantFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Restaurant {id}"`
    /// - location: `(0.0, 0.0)`
    /// - serves no drinks
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Restaurant {}", id),
            longitude: 0.0,
            latitude: 0.0,
            drink_ids: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the restaurant location as longitude/latitude degrees.
    pub fn location(mut self, longitude: f64, latitude: f64) -> Self {
        self.longitude = longitude;
        self.latitude = latitude;
        self
    }

    pub fn serves(mut self, drink_id: i32) -> Self {
        self.drink_ids.push(drink_id);
        self
    }

    /// Builds and inserts the restaurant and its served drinks.
    pub async fn build(self) -> Result<entity::restaurant::Model, DbErr> {
        let restaurant = entity::restaurant::ActiveModel {
            name: ActiveValue::Set(self.name),
            longitude: ActiveValue::Set(self.longitude),
            latitude: ActiveValue::Set(self.latitude),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        for drink_id in self.drink_ids {
            entity::restaurant_drink::ActiveModel {
                restaurant_id: ActiveValue::Set(restaurant.id),
                drink_id: ActiveValue::Set(drink_id),
            }
            .insert(self.db)
            .await?;
        }

        Ok(restaurant)
    }
}

/// Creates a restaurant with default values.
pub async fn create_restaurant(
    db: &DatabaseConnection,
) -> Result<entity::restaurant::Model, DbErr> {
    RestaurantFactory::new(db).build().await
}
