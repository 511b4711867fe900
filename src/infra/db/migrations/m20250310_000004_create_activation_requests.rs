//! Migration: Create activation_requests table.
//!
//! The partial unique index is what enforces "at most one open request
//! per user"; the application only translates the violation into a
//! friendly conflict message.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ActivationRequests::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ActivationRequests::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ActivationRequests::UserId).uuid().not_null())
                    .col(
                        ColumnDef::new(ActivationRequests::UserEmail)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivationRequests::Status)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivationRequests::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ActivationRequests::ProcessedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(ColumnDef::new(ActivationRequests::ProcessedBy).uuid().null())
                    .to_owned(),
            )
            .await?;

        // Partial unique index: one open (sent) request per user.
        // SeaORM's index builder cannot express the WHERE clause.
        manager
            .get_connection()
            .execute_unprepared(
                "CREATE UNIQUE INDEX idx_activation_requests_open \
                 ON activation_requests (user_id) WHERE status = 'sent'",
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_activation_requests_open")
            .await?;

        manager
            .drop_table(Table::drop().table(ActivationRequests::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum ActivationRequests {
    Table,
    Id,
    UserId,
    UserEmail,
    Status,
    CreatedAt,
    ProcessedAt,
    ProcessedBy,
}
