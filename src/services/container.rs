//! Service Container - Centralized service access.
//!
//! SOLID (SRP): Manages service lifecycle and access.
//! SOLID (DIP): Depends on service traits, not implementations.

use std::sync::Arc;

use super::{LocationRecorder, LocationService, UserManager, UserService};
use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::{Database, IpApiClient, LocationStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get location recording service
    fn locations(&self) -> Arc<dyn LocationService>;
}

/// Concrete implementation of ServiceContainer
#[derive(Clone)]
pub struct Services {
    user_service: Arc<dyn UserService>,
    location_service: Arc<dyn LocationService>,
}

impl Services {
    /// Create a new service container from already built services
    pub fn new(
        user_service: Arc<dyn UserService>,
        location_service: Arc<dyn LocationService>,
    ) -> Self {
        Self {
            user_service,
            location_service,
        }
    }

    /// Wire the SeaORM stores and the HTTP geolocation client
    pub fn from_database(db: &Database, config: &Config) -> AppResult<Self> {
        let connection = db.get_connection();

        let user_repo = Arc::new(UserStore::new(connection.clone()));
        let location_repo = Arc::new(LocationStore::new(connection));
        let geolocator = Arc::new(IpApiClient::new(
            config.geolocation_base_url.clone(),
            config.geolocation_timeout(),
        )?);

        Ok(Self::new(
            Arc::new(UserManager::new(user_repo)),
            Arc::new(LocationRecorder::new(location_repo, geolocator)),
        ))
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn locations(&self) -> Arc<dyn LocationService> {
        self.location_service.clone()
    }
}
