//! Store connection pool, schema migrations and liveness check.

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr, Statement,
};
use sea_orm_migration::{MigrationStatus, MigratorTrait};

pub mod migrations;

pub use migrations::Migrator;

/// One known migration and whether the store has applied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

/// Shared handle to the user store. Cloning shares the pool.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the pool for `database_url` and bring the schema up to date.
    pub async fn connect(database_url: &str) -> Result<Self, DbErr> {
        Self::connect_with(ConnectOptions::new(database_url)).await
    }

    /// Like [`Database::connect`], with caller-tuned pool options.
    pub async fn connect_with(options: ConnectOptions) -> Result<Self, DbErr> {
        let db = Self {
            connection: SeaDatabase::connect(options).await?,
        };
        db.run_migrations().await?;
        tracing::info!("User store ready, schema up to date");
        Ok(db)
    }

    /// Open the pool and leave the schema alone; `migrate` drives it instead.
    pub async fn connect_without_migrations(
        options: impl Into<ConnectOptions>,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            connection: SeaDatabase::connect(options).await?,
        })
    }

    /// Pool handle for building repositories.
    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Revert the most recent migration only.
    pub async fn rollback_migration(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Drop every table and re-apply all migrations.
    pub async fn fresh_migrations(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Every migration this binary knows about, in apply order.
    ///
    /// Creates the bookkeeping table first, so an empty store reports
    /// everything as pending.
    pub async fn migration_status(&self) -> Result<Vec<MigrationState>, DbErr> {
        Ok(Migrator::get_migration_with_status(&self.connection)
            .await?
            .iter()
            .map(|migration| MigrationState {
                name: migration.name().to_string(),
                applied: migration.status() == MigrationStatus::Applied,
            })
            .collect())
    }

    /// Round-trip `SELECT 1` through the pool.
    pub async fn ping(&self) -> Result<(), DbErr> {
        let backend = self.connection.get_database_backend();
        self.connection
            .execute(Statement::from_string(backend, "SELECT 1"))
            .await
            .map(|_| ())
    }
}
