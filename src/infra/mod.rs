//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and migrations
//! - Repositories for users and their recorded locations
//! - The outbound geolocation client

pub mod db;
pub mod geolocation;
pub mod repositories;

pub use db::{Database, MigrationState, Migrator};
pub use geolocation::{GeoLocator, IpApiClient};
pub use repositories::{LocationRepository, LocationStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use geolocation::MockGeoLocator;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockLocationRepository, MockUserRepository};
