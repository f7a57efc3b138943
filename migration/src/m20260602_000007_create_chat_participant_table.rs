use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000001_create_user_table::User;
use super::m20260602_000006_create_chat_table::Chat;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ChatParticipant::Table)
                    .if_not_exists()
                    .col(pk_auto(ChatParticipant::Id))
                    .col(integer(ChatParticipant::ChatId))
                    .col(integer(ChatParticipant::UserId))
                    .col(timestamp_null(ChatParticipant::LastReadAt))
                    .col(
                        timestamp(ChatParticipant::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_participant_chat_id")
                            .from(ChatParticipant::Table, ChatParticipant::ChatId)
                            .to(Chat::Table, Chat::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_chat_participant_user_id")
                            .from(ChatParticipant::Table, ChatParticipant::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_chat_participant_chat_user_unique")
                            .col(ChatParticipant::ChatId)
                            .col(ChatParticipant::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ChatParticipant::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ChatParticipant {
    Table,
    Id,
    ChatId,
    UserId,
    LastReadAt,
    CreatedAt,
}
