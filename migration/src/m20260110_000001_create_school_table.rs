use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(School::Table)
                    .if_not_exists()
                    .col(string(School::Id).primary_key())
                    .col(string(School::Name))
                    .col(string(School::Slug))
                    .col(string_null(School::LogoUrl))
                    .col(string(School::PrimaryColor))
                    .col(string(School::SecondaryColor))
                    .col(string(School::ThemeId).default("default"))
                    .col(string(School::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(School::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum School {
    Table,
    Id,
    Name,
    Slug,
    LogoUrl,
    PrimaryColor,
    SecondaryColor,
    ThemeId,
    CreatedAt,
}
