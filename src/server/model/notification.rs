//! Notification domain models.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::{model::notification::NotificationDto, server::model::user::User};

/// Kind of activity a notification reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityType {
    /// The actor started following the recipient.
    Follow,
    /// The actor, whom the recipient follows, posted a review.
    Review,
}

impl ActivityType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Follow => "follow",
            Self::Review => "review",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub recipient_id: i32,
    pub actor: User,
    /// Stored activity tag, see `ActivityType::as_str`.
    pub activity_type: String,
    pub drink_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    /// Converts an entity model using a pre-fetched actor lookup.
    ///
    /// Returns `None` when the actor is not in `actors`.
    pub fn from_entity(
        entity: entity::notification::Model,
        actors: &HashMap<i32, User>,
    ) -> Option<Self> {
        let actor = actors.get(&entity.actor_id)?.clone();

        Some(Self {
            id: entity.id,
            recipient_id: entity.recipient_id,
            actor,
            activity_type: entity.activity_type,
            drink_id: entity.drink_id,
            restaurant_id: entity.restaurant_id,
            created_at: entity.created_at,
            read: entity.read,
        })
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            actor: self.actor.into_summary_dto(),
            activity_type: self.activity_type,
            drink_id: self.drink_id,
            restaurant_id: self.restaurant_id,
            timestamp: self.created_at,
            read: self.read,
        }
    }
}

/// Values for a notification row to insert.
#[derive(Debug, Clone)]
pub struct CreateNotificationParam {
    pub recipient_id: i32,
    pub actor_id: i32,
    pub activity_type: ActivityType,
    pub drink_id: Option<i32>,
    pub restaurant_id: Option<i32>,
}
