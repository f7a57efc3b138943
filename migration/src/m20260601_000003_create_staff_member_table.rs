use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000001_create_user_table::User;
use super::m20260601_000002_create_rescue_table::Rescue;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(StaffMember::Table)
                    .if_not_exists()
                    .col(pk_auto(StaffMember::Id))
                    .col(integer(StaffMember::RescueId))
                    .col(integer(StaffMember::UserId))
                    .col(boolean(StaffMember::Coordinator).default(false))
                    .col(
                        timestamp(StaffMember::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_member_rescue_id")
                            .from(StaffMember::Table, StaffMember::RescueId)
                            .to(Rescue::Table, Rescue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_staff_member_user_id")
                            .from(StaffMember::Table, StaffMember::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .unique()
                            .name("idx_staff_member_rescue_user_unique")
                            .col(StaffMember::RescueId)
                            .col(StaffMember::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(StaffMember::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum StaffMember {
    Table,
    Id,
    RescueId,
    UserId,
    Coordinator,
    CreatedAt,
}
