use sea_orm_migration::{prelude::*, schema::*};

use super::m20141101_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Friendship::Table)
                    .if_not_exists()
                    .col(big_integer(Friendship::UserId))
                    .col(big_integer(Friendship::FriendId))
                    .col(string_len(Friendship::Status, 10).default("FOLLOWED"))
                    .primary_key(
                        Index::create()
                            .col(Friendship::UserId)
                            .col(Friendship::FriendId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friendship_user_id")
                            .from(Friendship::Table, Friendship::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friendship_friend_id")
                            .from(Friendship::Table, Friendship::FriendId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Friendship::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friendship {
    Table,
    UserId,
    FriendId,
    Status,
}
