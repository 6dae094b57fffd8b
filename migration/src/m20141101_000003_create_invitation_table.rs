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
                    .table(Invitation::Table)
                    .if_not_exists()
                    .col(big_integer(Invitation::UserId))
                    .col(big_integer(Invitation::FriendId))
                    .primary_key(
                        Index::create()
                            .col(Invitation::UserId)
                            .col(Invitation::FriendId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_user_id")
                            .from(Invitation::Table, Invitation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_invitation_friend_id")
                            .from(Invitation::Table, Invitation::FriendId)
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
            .drop_table(Table::drop().table(Invitation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Invitation {
    Table,
    UserId,
    FriendId,
}
