//! Migrate command - Database migration management.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    // Migrations are applied manually here, never as a side effect
    let db = Database::connect_without_migrations(&config)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    let outcome = match args.action {
        MigrateAction::Up => {
            db.run_migrations().await.map(|_| "Migrations applied")
        }
        MigrateAction::Down => {
            db.rollback_migration().await.map(|_| "Last migration rolled back")
        }
        MigrateAction::Status => {
            for (name, applied) in db.migration_status().await.map_err(AppError::from)? {
                println!("{}: {}", name, if applied { "applied" } else { "pending" });
            }
            Ok("Status listed")
        }
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all tables and re-running every migration");
            db.fresh_migrations().await.map(|_| "Fresh migrations applied")
        }
    };

    let message = outcome.map_err(|e| AppError::internal(e.to_string()))?;
    tracing::info!("{}", message);
    Ok(())
}
