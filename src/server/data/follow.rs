//! Follow edge repository.
//!
//! Each row of `user_follow` means "follower follows followed". Followers and
//! following lists are both read from these rows, so a single insert or delete
//! keeps the two views consistent.

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::user::User;

pub struct FollowRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FollowRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts the edge `follower_id -> followed_id` unless it already exists.
    ///
    /// Runs as a single `INSERT ... ON CONFLICT DO NOTHING`, so concurrent calls for the
    /// same pair insert at most one row.
    ///
    /// # Returns
    /// - `Ok(true)` - Edge created
    /// - `Ok(false)` - Edge already existed
    /// - `Err(DbErr)` - Database error during insert
    pub async fn follow(&self, follower_id: i32, followed_id: i32) -> Result<bool, DbErr> {
        let inserted = entity::prelude::UserFollow::insert(entity::user_follow::ActiveModel {
            follower_id: ActiveValue::Set(follower_id),
            followed_id: ActiveValue::Set(followed_id),
            created_at: ActiveValue::Set(Utc::now()),
        })
        .on_conflict(
            OnConflict::columns([
                entity::user_follow::Column::FollowerId,
                entity::user_follow::Column::FollowedId,
            ])
            .do_nothing()
            .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(inserted > 0)
    }

    /// Deletes the edge `follower_id -> followed_id`.
    ///
    /// # Returns
    /// - `Ok(true)` - Edge removed
    /// - `Ok(false)` - No such edge
    /// - `Err(DbErr)` - Database error during delete
    pub async fn unfollow(&self, follower_id: i32, followed_id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::UserFollow::delete_many()
            .filter(entity::user_follow::Column::FollowerId.eq(follower_id))
            .filter(entity::user_follow::Column::FollowedId.eq(followed_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Users following `user_id`, ordered by username.
    pub async fn followers(&self, user_id: i32) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .join_rev(
                JoinType::InnerJoin,
                entity::user_follow::Relation::Follower.def(),
            )
            .filter(entity::user_follow::Column::FollowedId.eq(user_id))
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Users that `user_id` follows, ordered by username.
    pub async fn following(&self, user_id: i32) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .join_rev(
                JoinType::InnerJoin,
                entity::user_follow::Relation::Followed.def(),
            )
            .filter(entity::user_follow::Column::FollowerId.eq(user_id))
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Ids of the users following `user_id`.
    pub async fn follower_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserFollow::find()
            .select_only()
            .column(entity::user_follow::Column::FollowerId)
            .filter(entity::user_follow::Column::FollowedId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await
    }

    /// Ids of the users that `user_id` follows.
    pub async fn following_ids(&self, user_id: i32) -> Result<Vec<i32>, DbErr> {
        entity::prelude::UserFollow::find()
            .select_only()
            .column(entity::user_follow::Column::FollowedId)
            .filter(entity::user_follow::Column::FollowerId.eq(user_id))
            .into_tuple()
            .all(self.db)
            .await
    }
}
