//! Follow graph business logic.
//!
//! A follow is one edge row. Creating it and notifying the followed user happen in
//! the same transaction.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        follow::FollowRepository, notification::NotificationRepository,
        review::ReviewRepository, user::UserRepository,
    },
    error::AppError,
    model::{
        notification::{ActivityType, CreateNotificationParam},
        review::Review,
        user::User,
    },
};

pub struct FollowService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> FollowService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Makes `user_id` follow `target_id` and notifies the target.
    ///
    /// # Returns
    /// - `Ok(())` - Edge created and notification written
    /// - `Err(AppError::BadRequest)` - Following yourself, or already following
    /// - `Err(AppError::NotFound)` - Either user does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn follow(&self, user_id: i32, target_id: i32) -> Result<(), AppError> {
        if user_id == target_id {
            return Err(AppError::BadRequest("You cannot follow yourself".to_string()));
        }

        self.require_users(user_id, target_id).await?;

        let txn = self.db.begin().await?;

        let created = FollowRepository::new(&txn).follow(user_id, target_id).await?;
        if !created {
            return Err(AppError::BadRequest(
                "You are already following this user".to_string(),
            ));
        }

        NotificationRepository::new(&txn)
            .create_many(vec![CreateNotificationParam {
                recipient_id: target_id,
                actor_id: user_id,
                activity_type: ActivityType::Follow,
                drink_id: None,
                restaurant_id: None,
            }])
            .await?;

        txn.commit().await?;

        tracing::info!("User {} followed user {}", user_id, target_id);

        Ok(())
    }

    /// Removes the edge `user_id -> target_id`.
    ///
    /// # Returns
    /// - `Ok(())` - Edge removed
    /// - `Err(AppError::BadRequest)` - `user_id` was not following `target_id`
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn unfollow(&self, user_id: i32, target_id: i32) -> Result<(), AppError> {
        let removed = FollowRepository::new(self.db)
            .unfollow(user_id, target_id)
            .await?;

        if !removed {
            return Err(AppError::BadRequest(
                "You are not following this user".to_string(),
            ));
        }

        tracing::info!("User {} unfollowed user {}", user_id, target_id);

        Ok(())
    }

    /// Users following `user_id`, ordered by username.
    pub async fn followers(&self, user_id: i32) -> Result<Vec<User>, AppError> {
        self.require_user(user_id).await?;

        Ok(FollowRepository::new(self.db).followers(user_id).await?)
    }

    /// Users that `user_id` follows, ordered by username.
    pub async fn following(&self, user_id: i32) -> Result<Vec<User>, AppError> {
        self.require_user(user_id).await?;

        Ok(FollowRepository::new(self.db).following(user_id).await?)
    }

    /// Reviews written by users that `user_id` follows, newest first.
    pub async fn following_reviews(&self, user_id: i32) -> Result<Vec<Review>, AppError> {
        self.require_user(user_id).await?;

        let following_ids = FollowRepository::new(self.db)
            .following_ids(user_id)
            .await?;

        Ok(ReviewRepository::new(self.db)
            .get_by_authors(&following_ids)
            .await?)
    }

    async fn require_user(&self, user_id: i32) -> Result<(), AppError> {
        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("User not found".to_string())),
        }
    }

    async fn require_users(&self, user_id: i32, target_id: i32) -> Result<(), AppError> {
        let users = UserRepository::new(self.db)
            .find_by_ids(&[user_id, target_id])
            .await?;

        if !users.contains_key(&user_id) || !users.contains_key(&target_id) {
            return Err(AppError::NotFound("User not found".to_string()));
        }

        Ok(())
    }
}
