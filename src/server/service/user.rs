//! User service for profile business logic.
//!
//! This module provides the `UserService` for assembling profiles, applying profile
//! updates, and ranking users by review activity.

use std::collections::{HashMap, HashSet};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        drink::DrinkRepository, follow::FollowRepository, preference::PreferenceRepository,
        restaurant::RestaurantRepository, review::ReviewRepository, user::UserRepository,
    },
    error::AppError,
    model::user::{Profile, TopUser, UpdateProfileParam, UpdateUserFields},
};

/// Number of users listed by `top_users`.
pub const TOP_USERS_LIMIT: u64 = 10;

/// Service providing business logic for user profiles.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Assembles the full profile of a user.
    ///
    /// # Returns
    /// - `Ok(Profile)` - User with preferences, social graph, and reviews
    /// - `Err(AppError::NotFound)` - No such user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_profile(&self, user_id: i32) -> Result<Profile, AppError> {
        let Some(user) = UserRepository::new(self.db).find_by_id(user_id).await? else {
            return Err(AppError::NotFound("User not found".to_string()));
        };

        let follow_repo = FollowRepository::new(self.db);

        let preferences = PreferenceRepository::new(self.db).get_names(user_id).await?;
        let followers = follow_repo.followers(user_id).await?;
        let following = follow_repo.following(user_id).await?;
        let reviews = ReviewRepository::new(self.db).get_by_author(user_id).await?;

        Ok(Profile {
            user,
            preferences,
            followers,
            following,
            reviews,
        })
    }

    /// Applies a partial profile update in a single transaction.
    ///
    /// Preference names are resolved to ids before anything is written. Any error rolls
    /// the whole update back, leaving the stored profile unchanged.
    ///
    /// # Returns
    /// - `Ok(Profile)` - The updated profile
    /// - `Err(AppError::NotFound)` - No such user, or an unknown drink or restaurant name
    /// - `Err(AppError::BadRequest)` - Empty username, or username taken by another user
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn update_profile(&self, param: UpdateProfileParam) -> Result<Profile, AppError> {
        let user_id = param.user_id;
        let txn = self.db.begin().await?;

        let user_repo = UserRepository::new(&txn);

        if user_repo.find_by_id(user_id).await?.is_none() {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        if let Some(username) = &param.username {
            if username.is_empty() {
                return Err(AppError::BadRequest("Username cannot be empty".to_string()));
            }
            if let Some(other) = user_repo.find_by_username(username).await? {
                if other.id != user_id {
                    return Err(AppError::BadRequest("Username already taken".to_string()));
                }
            }
        }

        if let Some(preferences) = param.preferences {
            let drink_names = unique_in_order(preferences.drink);
            let restaurant_names = unique_in_order(preferences.restaurant);

            let drink_ids = resolve_names(
                &drink_names,
                &DrinkRepository::new(&txn).ids_by_names(&drink_names).await?,
                "Drink",
            )?;
            let restaurant_ids = resolve_names(
                &restaurant_names,
                &RestaurantRepository::new(&txn)
                    .ids_by_names(&restaurant_names)
                    .await?,
                "Restaurant",
            )?;

            let preference_repo = PreferenceRepository::new(&txn);
            preference_repo.replace_drinks(user_id, &drink_ids).await?;
            preference_repo
                .replace_restaurants(user_id, &restaurant_ids)
                .await?;
        }

        user_repo
            .update_fields(
                user_id,
                UpdateUserFields {
                    username: param.username,
                    profile_picture: param.profile_picture,
                    location: param.location,
                },
            )
            .await
            .map_err(|e| AppError::on_unique_violation(e, "Username already taken"))?;

        txn.commit().await?;

        tracing::info!("Updated profile of user {}", user_id);

        self.get_profile(user_id).await
    }

    /// Users with the most reviews, ties broken by username.
    pub async fn top_users(&self) -> Result<Vec<TopUser>, AppError> {
        let users = UserRepository::new(self.db)
            .top_reviewers(TOP_USERS_LIMIT)
            .await?;

        Ok(users)
    }
}

/// Drops repeated names while keeping first occurrences in order.
fn unique_in_order(names: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    names
        .into_iter()
        .map(|name| name.trim().to_string())
        .filter(|name| seen.insert(name.clone()))
        .collect()
}

/// Maps every name to its id, failing on the first unknown name.
fn resolve_names(
    names: &[String],
    ids: &HashMap<String, i32>,
    kind: &str,
) -> Result<Vec<i32>, AppError> {
    names
        .iter()
        .map(|name| {
            ids.get(name)
                .copied()
                .ok_or_else(|| AppError::NotFound(format!("{} '{}' not found", kind, name)))
        })
        .collect()
}
