use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserFields},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod search_by_username;
mod top_reviewers;
mod update_fields;
