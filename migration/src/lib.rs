pub use sea_orm_migration::prelude::*;

mod m20250105_000001_create_user_table;
mod m20250105_000002_create_drink_table;
mod m20250105_000003_create_restaurant_table;
mod m20250105_000004_create_restaurant_drink_table;
mod m20250105_000005_create_review_table;
mod m20250106_000006_create_user_follow_table;
mod m20250106_000007_create_user_preference_tables;
mod m20250112_000008_create_notification_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250105_000001_create_user_table::Migration),
            Box::new(m20250105_000002_create_drink_table::Migration),
            Box::new(m20250105_000003_create_restaurant_table::Migration),
            Box::new(m20250105_000004_create_restaurant_drink_table::Migration),
            Box::new(m20250105_000005_create_review_table::Migration),
            Box::new(m20250106_000006_create_user_follow_table::Migration),
            Box::new(m20250106_000007_create_user_preference_tables::Migration),
            Box::new(m20250112_000008_create_notification_table::Migration),
        ]
    }
}
