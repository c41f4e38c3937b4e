use crate::server::data::follow::FollowRepository;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod followers;
mod unfollow;
