use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Drink::Table)
                    .if_not_exists()
                    .col(pk_auto(Drink::Id))
                    .col(string(Drink::Name))
                    .col(string(Drink::Category))
                    .col(json(Drink::Ingredients))
                    .col(text_null(Drink::Instructions))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_drink_name")
                    .table(Drink::Table)
                    .col(Drink::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Drink::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Drink {
    Table,
    Id,
    Name,
    Category,
    Ingredients,
    Instructions,
}
