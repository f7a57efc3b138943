use sea_orm_migration::{prelude::*, schema::*};

use super::m20260601_000002_create_rescue_table::Rescue;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(pk_auto(Pet::Id))
                    .col(integer(Pet::RescueId))
                    .col(string(Pet::Name))
                    .col(string(Pet::Species))
                    .col(string_null(Pet::Breed))
                    .col(integer(Pet::AgeMonths))
                    .col(string(Pet::Status))
                    .col(text(Pet::DescriptionSource))
                    .col(text(Pet::DescriptionHtml))
                    .col(string_null(Pet::PhotoUrl))
                    .col(
                        timestamp(Pet::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Pet::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_rescue_id")
                            .from(Pet::Table, Pet::RescueId)
                            .to(Rescue::Table, Rescue::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pet {
    Table,
    Id,
    RescueId,
    Name,
    Species,
    Breed,
    AgeMonths,
    Status,
    DescriptionSource,
    DescriptionHtml,
    PhotoUrl,
    CreatedAt,
    UpdatedAt,
}
