//! Migration: Create content and app_images tables.
//!
//! `topic_id`/`software_id` are plain columns, not foreign keys:
//! deleting a topic must leave its content in place (orphaned content
//! stays visible), and images survive their content by design.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Content::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Content::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Content::Title).string().not_null())
                    .col(ColumnDef::new(Content::Body).text().not_null())
                    .col(ColumnDef::new(Content::TopicId).uuid().null())
                    .col(ColumnDef::new(Content::SoftwareId).uuid().null())
                    .col(ColumnDef::new(Content::Platforms).json_binary().not_null())
                    .col(ColumnDef::new(Content::Purpose).string().not_null())
                    .col(ColumnDef::new(Content::Status).string().not_null())
                    .col(ColumnDef::new(Content::ImageUrl).text().null())
                    .col(
                        ColumnDef::new(Content::CopyCount)
                            .big_integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(Content::OwnerId).uuid().null())
                    .col(
                        ColumnDef::new(Content::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Content::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_content_topic_id")
                    .table(Content::Table)
                    .col(Content::TopicId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_content_owner_id")
                    .table(Content::Table)
                    .col(Content::OwnerId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AppImages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AppImages::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(AppImages::Url).text().not_null())
                    .col(ColumnDef::new(AppImages::ContentId).uuid().null())
                    .col(ColumnDef::new(AppImages::ContentTitle).string().not_null())
                    .col(ColumnDef::new(AppImages::Description).text().null())
                    .col(
                        ColumnDef::new(AppImages::UploadedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AppImages::Table).to_owned())
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_content_owner_id")
                    .table(Content::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_index(
                Index::drop()
                    .name("idx_content_topic_id")
                    .table(Content::Table)
                    .to_owned(),
            )
            .await?;
        manager
            .drop_table(Table::drop().table(Content::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Content {
    Table,
    Id,
    Title,
    Body,
    TopicId,
    SoftwareId,
    Platforms,
    Purpose,
    Status,
    ImageUrl,
    CopyCount,
    OwnerId,
    CreatedAt,
    UpdatedAt,
}

#[derive(Iden)]
enum AppImages {
    Table,
    Id,
    Url,
    ContentId,
    ContentTitle,
    Description,
    UploadedAt,
}
