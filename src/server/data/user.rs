//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookups, profile field updates, username search, and
//! the review-count ranking behind the top users listing.

use std::collections::HashMap;

use sea_orm::{
    sea_query::{Expr, Func},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::{
    data::contains_folded,
    model::user::{CreateUserParam, TopUser, UpdateUserFields, User},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to a database connection or open transaction and
/// provides methods for creating, reading, updating, and querying user records.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection or transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// # Arguments
    /// - `param` - Username, email, and password hash of the new user
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including a unique constraint violation
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password_hash: ActiveValue::Set(param.password_hash),
            profile_picture: ActiveValue::Set(None),
            location: ActiveValue::Set(None),
            created_at: ActiveValue::Set(chrono::Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, user_id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(user_id)
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact email address.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by exact username.
    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Username.eq(username))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Fetches several users at once, keyed by id.
    ///
    /// Ids with no matching row are absent from the map.
    ///
    /// # Arguments
    /// - `user_ids` - Ids to look up; duplicates are fine
    ///
    /// # Returns
    /// - `Ok(HashMap<i32, User>)` - Found users keyed by id (empty for empty input)
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_ids(&self, user_ids: &[i32]) -> Result<HashMap<i32, User>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Id.is_in(user_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .map(|e| (e.id, User::from_entity(e)))
            .collect())
    }

    /// Overwrites the display fields that are `Some` in `fields`.
    ///
    /// # Returns
    /// - `Ok(())` - Fields updated (or nothing to update)
    /// - `Err(DbErr)` - Database error, including a username unique violation
    pub async fn update_fields(&self, user_id: i32, fields: UpdateUserFields) -> Result<(), DbErr> {
        if fields.username.is_none() && fields.profile_picture.is_none() && fields.location.is_none()
        {
            return Ok(());
        }

        let mut update = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(user_id));

        if let Some(username) = fields.username {
            update = update.col_expr(entity::user::Column::Username, Expr::value(username));
        }
        if let Some(profile_picture) = fields.profile_picture {
            update = update.col_expr(
                entity::user::Column::ProfilePicture,
                Expr::value(profile_picture),
            );
        }
        if let Some(location) = fields.location {
            update = update.col_expr(entity::user::Column::Location, Expr::value(location));
        }

        update.exec(self.db).await?;

        Ok(())
    }

    /// Case-insensitive substring search over usernames, ordered by username.
    ///
    /// The query matches literally; `%` and `_` carry no wildcard meaning.
    pub async fn search_by_username(&self, query: &str) -> Result<Vec<User>, DbErr> {
        let folded = query.to_lowercase();

        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Username)
            .all(self.db)
            .await?;

        Ok(entities
            .into_iter()
            .filter(|u| contains_folded(&u.username, &folded))
            .map(User::from_entity)
            .collect())
    }

    /// Ranks users by number of reviews written.
    ///
    /// Users without reviews are not ranked. Ties are broken by username.
    ///
    /// # Arguments
    /// - `limit` - Maximum number of users returned
    ///
    /// # Returns
    /// - `Ok(Vec<TopUser>)` - Users with review counts, most reviews first
    /// - `Err(DbErr)` - Database error during query
    pub async fn top_reviewers(&self, limit: u64) -> Result<Vec<TopUser>, DbErr> {
        let rows: Vec<(i32, i64)> = entity::prelude::User::find()
            .select_only()
            .column(entity::user::Column::Id)
            .column_as(
                Expr::expr(Func::count(Expr::col((
                    entity::review::Entity,
                    entity::review::Column::Id,
                )))),
                "total_reviews",
            )
            .join(JoinType::InnerJoin, entity::user::Relation::Review.def())
            .group_by(entity::user::Column::Id)
            .group_by(entity::user::Column::Username)
            .order_by_desc(Expr::cust("total_reviews"))
            .order_by_asc(entity::user::Column::Username)
            .limit(limit)
            .into_tuple()
            .all(self.db)
            .await?;

        let ids: Vec<i32> = rows.iter().map(|(id, _)| *id).collect();
        let mut users = self.find_by_ids(&ids).await?;

        Ok(rows
            .into_iter()
            .filter_map(|(id, total)| {
                users.remove(&id).map(|user| TopUser {
                    user,
                    total_reviews: total as u64,
                })
            })
            .collect())
    }
}
