use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[cfg(feature = "server")]
use utoipa::ToSchema;

use crate::model::user::UserSummaryDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct NotificationDto {
    pub id: i32,
    pub actor: UserSummaryDto,
    /// `follow` or `review`.
    pub activity_type: String,
    pub drink_id: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "server", derive(ToSchema))]
pub struct MarkReadDto {
    pub updated: u64,
}
