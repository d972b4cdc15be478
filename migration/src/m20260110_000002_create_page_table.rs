use sea_orm_migration::{prelude::*, schema::*};

use super::m20260110_000001_create_school_table::School;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Page::Table)
                    .if_not_exists()
                    .col(string(Page::Id).primary_key())
                    .col(string(Page::SchoolId))
                    .col(string(Page::Name))
                    .col(string(Page::Slug))
                    .col(text(Page::Components).default("[]"))
                    .col(boolean(Page::IsPublished).default(false))
                    .col(string_null(Page::ThemeId))
                    .col(string(Page::CreatedAt))
                    .col(string(Page::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_page_school_id")
                            .from(Page::Table, Page::SchoolId)
                            .to(School::Table, School::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_page_school_id")
                    .table(Page::Table)
                    .col(Page::SchoolId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Page::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Page {
    Table,
    Id,
    SchoolId,
    Name,
    Slug,
    Components,
    IsPublished,
    ThemeId,
    CreatedAt,
    UpdatedAt,
}
