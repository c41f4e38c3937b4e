use crate::server::{
    data::notification::NotificationRepository,
    model::notification::{ActivityType, CreateNotificationParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_many;
mod mark_all_read;
