//! Database migrations.
//!
//! Each migration is a separate module following SeaORM conventions.
//! Migration names follow the pattern: m{YYYYMMDD}_{NNNNNN}_{description}

use sea_orm_migration::prelude::*;

mod m20250310_000001_create_accounts;
mod m20250310_000002_create_catalog;
mod m20250310_000003_create_content;
mod m20250310_000004_create_activation_requests;
mod m20250310_000005_create_program_banners;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250310_000001_create_accounts::Migration),
            Box::new(m20250310_000002_create_catalog::Migration),
            Box::new(m20250310_000003_create_content::Migration),
            Box::new(m20250310_000004_create_activation_requests::Migration),
            Box::new(m20250310_000005_create_program_banners::Migration),
        ]
    }
}
