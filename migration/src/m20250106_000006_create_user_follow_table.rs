use sea_orm_migration::{prelude::*, schema::*};

use super::m20250105_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserFollow::Table)
                    .if_not_exists()
                    .col(integer(UserFollow::FollowerId))
                    .col(integer(UserFollow::FollowedId))
                    .col(
                        timestamp_with_time_zone(UserFollow::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(UserFollow::FollowerId)
                            .col(UserFollow::FollowedId),
                    )
                    .check(Expr::cust("follower_id <> followed_id"))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_follow_follower_id")
                            .from(UserFollow::Table, UserFollow::FollowerId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_follow_followed_id")
                            .from(UserFollow::Table, UserFollow::FollowedId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_user_follow_followed_id")
                    .table(UserFollow::Table)
                    .col(UserFollow::FollowedId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserFollow::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserFollow {
    Table,
    FollowerId,
    FollowedId,
    CreatedAt,
}
