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
                    .table(UserDrinkPreference::Table)
                    .if_not_exists()
                    .col(integer(UserDrinkPreference::UserId))
                    .col(integer(UserDrinkPreference::DrinkId))
                    .col(integer(UserDrinkPreference::Position))
                    .primary_key(
                        Index::create()
                            .col(UserDrinkPreference::UserId)
                            .col(UserDrinkPreference::DrinkId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_drink_preference_user_id")
                            .from(UserDrinkPreference::Table, UserDrinkPreference::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_drink_preference_drink_id")
                            .from(UserDrinkPreference::Table, UserDrinkPreference::DrinkId)
                            .to(Drink::Table, Drink::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(UserRestaurantPreference::Table)
                    .if_not_exists()
                    .col(integer(UserRestaurantPreference::UserId))
                    .col(integer(UserRestaurantPreference::RestaurantId))
                    .col(integer(UserRestaurantPreference::Position))
                    .primary_key(
                        Index::create()
                            .col(UserRestaurantPreference::UserId)
                            .col(UserRestaurantPreference::RestaurantId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_restaurant_preference_user_id")
                            .from(
                                UserRestaurantPreference::Table,
                                UserRestaurantPreference::UserId,
                            )
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_restaurant_preference_restaurant_id")
                            .from(
                                UserRestaurantPreference::Table,
                                UserRestaurantPreference::RestaurantId,
                            )
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(UserRestaurantPreference::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(UserDrinkPreference::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserDrinkPreference {
    Table,
    UserId,
    DrinkId,
    Position,
}

#[derive(DeriveIden)]
pub enum UserRestaurantPreference {
    Table,
    UserId,
    RestaurantId,
    Position,
}
