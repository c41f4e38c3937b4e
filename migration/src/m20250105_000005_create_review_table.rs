use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250105_000001_create_user_table::User, m20250105_000002_create_drink_table::Drink,
    m20250105_000003_create_restaurant_table::Restaurant,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Review::Table)
                    .if_not_exists()
                    .col(pk_auto(Review::Id))
                    .col(integer(Review::UserId))
                    .col(integer_null(Review::DrinkId))
                    .col(integer_null(Review::RestaurantId))
                    .col(integer(Review::Rating))
                    .col(text(Review::Comment))
                    .col(integer_null(Review::ImpairmentLevel))
                    .col(string_null(Review::PhotoUrl))
                    .col(
                        timestamp_with_time_zone(Review::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    // Exactly one review target
                    .check(Expr::cust("(drink_id IS NULL) <> (restaurant_id IS NULL)"))
                    .check(Expr::cust("rating BETWEEN 1 AND 5"))
                    .check(Expr::cust(
                        "impairment_level IS NULL OR impairment_level BETWEEN 1 AND 5",
                    ))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_user_id")
                            .from(Review::Table, Review::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_drink_id")
                            .from(Review::Table, Review::DrinkId)
                            .to(Drink::Table, Drink::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_review_restaurant_id")
                            .from(Review::Table, Review::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_drink_id")
                    .table(Review::Table)
                    .col(Review::DrinkId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_review_restaurant_id")
                    .table(Review::Table)
                    .col(Review::RestaurantId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Review::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Review {
    Table,
    Id,
    UserId,
    DrinkId,
    RestaurantId,
    Rating,
    Comment,
    ImpairmentLevel,
    PhotoUrl,
    CreatedAt,
}
