use crate::server::data::{drink::DrinkRepository, restaurant::RestaurantRepository};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod drink;
mod restaurant;
