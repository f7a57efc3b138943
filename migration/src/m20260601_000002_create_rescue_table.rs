use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rescue::Table)
                    .if_not_exists()
                    .col(pk_auto(Rescue::Id))
                    .col(string(Rescue::Name))
                    .col(string_uniq(Rescue::Email))
                    .col(string(Rescue::City))
                    .col(text(Rescue::DescriptionSource))
                    .col(text(Rescue::DescriptionHtml))
                    .col(
                        timestamp(Rescue::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Rescue::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rescue::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Rescue {
    Table,
    Id,
    Name,
    Email,
    City,
    DescriptionSource,
    DescriptionHtml,
    CreatedAt,
    UpdatedAt,
}
