//! Review factory for creating test review entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test reviews of either a drink or a restaurant.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    drink_id: Option<i32>,
    restaurant_id: Option<i32>,
    rating: i32,
    comment: String,
    impairment_level: Option<i32>,
    photo_url: Option<String>,
    created_at: DateTime<Utc>,
}

impl<'a> ReviewFactory<'a> {
    fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            user_id,
            drink_id: None,
            restaurant_id: None,
            rating: 3,
            comment: format!("Review {}", id),
            impairment_level: None,
            photo_url: None,
            created_at: Utc::now(),
        }
    }

    /// Starts a review of a drink.
    pub fn for_drink(db: &'a DatabaseConnection, user_id: i32, drink_id: i32) -> Self {
        let mut factory = Self::new(db, user_id);
        factory.drink_id = Some(drink_id);
        factory
    }

    /// Starts a review of a restaurant.
    pub fn for_restaurant(db: &'a DatabaseConnection, user_id: i32, restaurant_id: i32) -> Self {
        let mut factory = Self::new(db, user_id);
        factory.restaurant_id = Some(restaurant_id);
        factory
    }

    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn impairment_level(mut self, impairment_level: i32) -> Self {
        self.impairment_level = Some(impairment_level);
        self
    }

    pub fn photo_url(mut self, photo_url: impl Into<String>) -> Self {
        self.photo_url = Some(photo_url.into());
        self
    }

    /// Overrides the creation timestamp, used to control ordering in tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the review entity into the database.
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            drink_id: ActiveValue::Set(self.drink_id),
            restaurant_id: ActiveValue::Set(self.restaurant_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            impairment_level: ActiveValue::Set(self.impairment_level),
            photo_url: ActiveValue::Set(self.photo_url),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a default review of a drink.
pub async fn create_drink_review(
    db: &DatabaseConnection,
    user_id: i32,
    drink_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::for_drink(db, user_id, drink_id).build().await
}

/// Creates a default review of a restaurant.
pub async fn create_restaurant_review(
    db: &DatabaseConnection,
    user_id: i32,
    restaurant_id: i32,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::for_restaurant(db, user_id, restaurant_id)
        .build()
        .await
}
