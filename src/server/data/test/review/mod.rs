use crate::server::{
    data::review::ReviewRepository,
    model::review::{CreateReviewParam, ReviewTarget},
};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_target;
mod most_reviewed_drinks;
mod restaurant_rating;
