use crate::server::error::AppError;
use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod follow;
mod restaurant;
