//! Notification inbox of a user.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{notification::NotificationRepository, user::UserRepository},
    error::AppError,
    model::notification::Notification,
};

pub struct NotificationService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> NotificationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Notifications addressed to `user_id`, newest first.
    ///
    /// # Returns
    /// - `Ok(Vec<Notification>)` - The user's notifications
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Notification>, AppError> {
        self.require_user(user_id).await?;

        Ok(NotificationRepository::new(self.db)
            .get_by_recipient(user_id)
            .await?)
    }

    /// Marks all of a user's unread notifications as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications marked
    /// - `Err(AppError::NotFound)` - No such user
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, AppError> {
        self.require_user(user_id).await?;

        Ok(NotificationRepository::new(self.db)
            .mark_all_read(user_id)
            .await?)
    }

    async fn require_user(&self, user_id: i32) -> Result<(), AppError> {
        match UserRepository::new(self.db).find_by_id(user_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound("User not found".to_string())),
        }
    }
}
