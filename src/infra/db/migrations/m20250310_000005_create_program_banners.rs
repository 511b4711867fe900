//! Migration: Create program_banners table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ProgramBanners::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProgramBanners::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ProgramBanners::ImageUrl).text().not_null())
                    .col(ColumnDef::new(ProgramBanners::LinkUrl).text().null())
                    .col(ColumnDef::new(ProgramBanners::Title).string().null())
                    .col(ColumnDef::new(ProgramBanners::Status).string().not_null())
                    .col(
                        ColumnDef::new(ProgramBanners::OrderIndex)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(
                        ColumnDef::new(ProgramBanners::StartDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProgramBanners::EndDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(
                        ColumnDef::new(ProgramBanners::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_program_banners_order")
                    .table(ProgramBanners::Table)
                    .col(ProgramBanners::OrderIndex)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_program_banners_order")
                    .table(ProgramBanners::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProgramBanners::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ProgramBanners {
    Table,
    Id,
    ImageUrl,
    LinkUrl,
    Title,
    Status,
    OrderIndex,
    StartDate,
    EndDate,
    CreatedAt,
}
