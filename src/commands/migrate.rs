//! Migrate command - Manual schema control.

use crate::cli::args::{MigrateAction, MigrateArgs};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: Config) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database_url)
        .await
        .map_err(|e| AppError::internal(format!("Cannot reach user store: {}", e)))?;

    tracing::info!(action = ?args.action, "Migrating user store");

    match args.action {
        MigrateAction::Up => db.run_migrations().await?,
        MigrateAction::Down => db.rollback_migration().await?,
        MigrateAction::Fresh => {
            tracing::warn!("Dropping all user and location data");
            db.fresh_migrations().await?
        }
        MigrateAction::Status => {
            for migration in db.migration_status().await? {
                let marker = if migration.applied { "applied" } else { "pending" };
                println!("{:<8} {}", marker, migration.name);
            }
            return Ok(());
        }
    }

    tracing::info!(action = ?args.action, "Migration finished");
    Ok(())
}
