use crate::server::data::preference::PreferenceRepository;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod replace;
