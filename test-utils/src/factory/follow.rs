//! Follow edge factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Inserts a follow edge meaning `follower_id` follows `followed_id`.
///
/// # Returns
/// - `Ok(entity::user_follow::Model)` - Created edge
/// - `Err(DbErr)` - Database error during insert (including a duplicate edge)
pub async fn create_follow(
    db: &DatabaseConnection,
    follower_id: i32,
    followed_id: i32,
) -> Result<entity::user_follow::Model, DbErr> {
    entity::user_follow::ActiveModel {
        follower_id: ActiveValue::Set(follower_id),
        followed_id: ActiveValue::Set(followed_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
