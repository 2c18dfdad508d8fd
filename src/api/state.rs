//! Application state - Dependency injection container.
//!
//! Provides centralized access to all application services and infrastructure.

use std::sync::Arc;

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;
use crate::services::{LocationService, ServiceContainer, Services, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Best-effort location recording
    pub location_service: Arc<dyn LocationService>,
    /// Database connection, used by the health check
    pub database: Arc<Database>,
    /// Settings fixed at startup
    pub config: Arc<Config>,
}

impl AppState {
    /// Wire every service from the database and configuration.
    pub fn from_config(database: Arc<Database>, config: Config) -> AppResult<Self> {
        let container = Services::from_database(&database, &config)?;

        Ok(Self::new(
            container.users(),
            container.locations(),
            database,
            config,
        ))
    }

    /// Create new application state with manually injected services.
    pub fn new(
        user_service: Arc<dyn UserService>,
        location_service: Arc<dyn LocationService>,
        database: Arc<Database>,
        config: Config,
    ) -> Self {
        Self {
            user_service,
            location_service,
            database,
            config: Arc::new(config),
        }
    }
}
