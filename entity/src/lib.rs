//! SeaORM entity definitions for the Tippsy schema.

pub mod prelude;

pub mod drink;
pub mod notification;
pub mod restaurant;
pub mod restaurant_drink;
pub mod review;
pub mod user;
pub mod user_drink_preference;
pub mod user_follow;
pub mod user_restaurant_preference;
