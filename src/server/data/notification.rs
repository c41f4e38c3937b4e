//! Notification data repository.

use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{
    data::user::UserRepository,
    model::notification::{CreateNotificationParam, Notification},
};

pub struct NotificationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NotificationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts unread notifications in one statement.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted (0 for empty input)
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_many(&self, params: Vec<CreateNotificationParam>) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let now = chrono::Utc::now();
        let rows = params
            .into_iter()
            .map(|param| entity::notification::ActiveModel {
                recipient_id: ActiveValue::Set(param.recipient_id),
                actor_id: ActiveValue::Set(param.actor_id),
                activity_type: ActiveValue::Set(param.activity_type.as_str().to_string()),
                drink_id: ActiveValue::Set(param.drink_id),
                restaurant_id: ActiveValue::Set(param.restaurant_id),
                created_at: ActiveValue::Set(now),
                read: ActiveValue::Set(false),
                ..Default::default()
            });

        entity::prelude::Notification::insert_many(rows)
            .exec_without_returning(self.db)
            .await
    }

    /// Notifications addressed to a user, newest first, with actors resolved.
    pub async fn get_by_recipient(&self, user_id: i32) -> Result<Vec<Notification>, DbErr> {
        let entities = entity::prelude::Notification::find()
            .filter(entity::notification::Column::RecipientId.eq(user_id))
            .order_by_desc(entity::notification::Column::CreatedAt)
            .order_by_desc(entity::notification::Column::Id)
            .all(self.db)
            .await?;

        let mut actor_ids: Vec<i32> = entities.iter().map(|e| e.actor_id).collect();
        actor_ids.sort_unstable();
        actor_ids.dedup();

        let actors = UserRepository::new(self.db).find_by_ids(&actor_ids).await?;

        Ok(entities
            .into_iter()
            .filter_map(|e| Notification::from_entity(e, &actors))
            .collect())
    }

    /// Marks every unread notification of a user as read.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of notifications that changed
    /// - `Err(DbErr)` - Database error during update
    pub async fn mark_all_read(&self, user_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Notification::update_many()
            .col_expr(entity::notification::Column::Read, Expr::value(true))
            .filter(entity::notification::Column::RecipientId.eq(user_id))
            .filter(entity::notification::Column::Read.eq(false))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
