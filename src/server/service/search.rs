//! Name search over drinks, restaurants and users.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{drink::DrinkRepository, restaurant::RestaurantRepository, user::UserRepository},
    error::AppError,
    model::{
        drink::{Drink, NamedItem},
        restaurant::Restaurant,
        user::User,
    },
};

pub struct SearchService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> SearchService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Drinks whose name or category contains `query`, ignoring case.
    ///
    /// # Returns
    /// - `Ok(Vec<Drink>)` - Matches ordered by name
    /// - `Err(AppError::BadRequest)` - Missing or blank query
    pub async fn drinks(&self, query: Option<&str>) -> Result<Vec<Drink>, AppError> {
        let query = require_query(query, "query")?;

        Ok(DrinkRepository::new(self.db).search(query).await?)
    }

    /// Restaurants whose name contains `query`, ignoring case.
    pub async fn restaurants(&self, query: Option<&str>) -> Result<Vec<Restaurant>, AppError> {
        let query = require_query(query, "query")?;

        Ok(RestaurantRepository::new(self.db).search(query).await?)
    }

    /// Users whose username contains `username`, ignoring case.
    pub async fn users(&self, username: Option<&str>) -> Result<Vec<User>, AppError> {
        let username = require_query(username, "username")?;

        Ok(UserRepository::new(self.db)
            .search_by_username(username)
            .await?)
    }

    pub async fn all_drinks(&self) -> Result<Vec<NamedItem>, AppError> {
        Ok(DrinkRepository::new(self.db).all_names().await?)
    }

    pub async fn all_restaurants(&self) -> Result<Vec<NamedItem>, AppError> {
        Ok(RestaurantRepository::new(self.db).all_names().await?)
    }
}

fn require_query<'q>(query: Option<&'q str>, name: &str) -> Result<&'q str, AppError> {
    match query.map(str::trim) {
        Some(query) if !query.is_empty() => Ok(query),
        _ => Err(AppError::BadRequest(format!(
            "Search parameter '{}' is required",
            name
        ))),
    }
}
