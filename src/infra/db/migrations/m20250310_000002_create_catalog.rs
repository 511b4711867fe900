//! Migration: Create topics and software tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Topics::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Topics::Name).string().not_null())
                    .col(ColumnDef::new(Topics::NameVi).string().not_null())
                    .col(ColumnDef::new(Topics::Description).text().not_null())
                    .col(ColumnDef::new(Topics::Icon).string().not_null())
                    .col(ColumnDef::new(Topics::Color).string().not_null())
                    .col(ColumnDef::new(Topics::Status).string().not_null())
                    .col(
                        ColumnDef::new(Topics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Software::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Software::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Software::Name).string().not_null())
                    .col(ColumnDef::new(Software::Description).text().not_null())
                    .col(ColumnDef::new(Software::Tag).string().not_null())
                    .col(ColumnDef::new(Software::Status).string().not_null())
                    .col(
                        ColumnDef::new(Software::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Software::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Topics {
    Table,
    Id,
    Name,
    NameVi,
    Description,
    Icon,
    Color,
    Status,
    CreatedAt,
}

#[derive(Iden)]
enum Software {
    Table,
    Id,
    Name,
    Description,
    Tag,
    Status,
    CreatedAt,
}
