use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250105_000002_create_drink_table::Drink,
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
                    .table(RestaurantDrink::Table)
                    .if_not_exists()
                    .col(integer(RestaurantDrink::RestaurantId))
                    .col(integer(RestaurantDrink::DrinkId))
                    .primary_key(
                        Index::create()
                            .col(RestaurantDrink::RestaurantId)
                            .col(RestaurantDrink::DrinkId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_drink_restaurant_id")
                            .from(RestaurantDrink::Table, RestaurantDrink::RestaurantId)
                            .to(Restaurant::Table, Restaurant::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_restaurant_drink_drink_id")
                            .from(RestaurantDrink::Table, RestaurantDrink::DrinkId)
                            .to(Drink::Table, Drink::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RestaurantDrink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum RestaurantDrink {
    Table,
    RestaurantId,
    DrinkId,
}
