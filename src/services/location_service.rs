//! Location service - Records where write requests came from.
//!
//! Recording is best effort. Nothing here can fail the request that
//! triggered it.

use async_trait::async_trait;
use std::net::IpAddr;
use std::sync::Arc;

use crate::config::MAX_IP_ADDRESS_LENGTH;
use crate::domain::{NewUserLocation, UserLocation};
use crate::infra::{GeoLocator, LocationRepository};

/// Location recording trait for dependency injection.
#[async_trait]
pub trait LocationService: Send + Sync {
    /// Geolocate `client_ip` and append a location row for the user.
    ///
    /// Returns `None` when there was no usable IP or the row could not
    /// be stored. A failed lookup still stores the IP with empty geo fields.
    async fn record(&self, user_id: i32, client_ip: Option<String>) -> Option<UserLocation>;
}

/// Concrete implementation of LocationService
pub struct LocationRecorder {
    repo: Arc<dyn LocationRepository>,
    geolocator: Arc<dyn GeoLocator>,
}

impl LocationRecorder {
    pub fn new(repo: Arc<dyn LocationRepository>, geolocator: Arc<dyn GeoLocator>) -> Self {
        Self { repo, geolocator }
    }
}

/// Canonical form of a client IP, or `None` if it is not an address.
fn usable_ip(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_IP_ADDRESS_LENGTH {
        return None;
    }
    trimmed.parse::<IpAddr>().ok().map(|ip| ip.to_string())
}

#[async_trait]
impl LocationService for LocationRecorder {
    async fn record(&self, user_id: i32, client_ip: Option<String>) -> Option<UserLocation> {
        let Some(ip) = client_ip.as_deref().and_then(usable_ip) else {
            tracing::debug!(user_id, "No client IP, skipping location");
            return None;
        };

        let geo = self.geolocator.lookup(&ip).await;
        if geo.is_none() {
            tracing::debug!(user_id, ip = %ip, "Geolocation unavailable");
        }

        match self.repo.create(NewUserLocation::new(user_id, ip, geo)).await {
            Ok(location) => Some(location),
            Err(e) => {
                tracing::warn!(user_id, "Failed to store user location: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoLocation;
    use crate::errors::AppError;
    use crate::infra::{MockGeoLocator, MockLocationRepository};
    use chrono::Utc;

    fn stored(location: NewUserLocation) -> UserLocation {
        UserLocation {
            id: 1,
            user_id: location.user_id,
            ip_address: Some(location.ip_address),
            country: location.geo.country,
            state: location.geo.state,
            latitude: location.geo.latitude,
            longitude: location.geo.longitude,
            created_at: Utc::now(),
        }
    }

    fn india() -> GeoLocation {
        GeoLocation {
            country: Some("India".to_string()),
            state: Some("Kerala".to_string()),
            latitude: Some(10.5),
            longitude: Some(76.2),
        }
    }

    #[test]
    fn test_usable_ip() {
        assert_eq!(usable_ip(" 8.8.8.8 ").as_deref(), Some("8.8.8.8"));
        assert_eq!(usable_ip("::1").as_deref(), Some("::1"));
        assert!(usable_ip("").is_none());
        assert!(usable_ip("unknown").is_none());
        assert!(usable_ip("999.1.1.1").is_none());
    }

    #[tokio::test]
    async fn test_record_stores_geolocated_row() {
        let mut geo = MockGeoLocator::new();
        geo.expect_lookup().times(1).returning(|_| Some(india()));

        let mut repo = MockLocationRepository::new();
        repo.expect_create()
            .withf(|loc| loc.user_id == 3 && loc.ip_address == "8.8.8.8")
            .times(1)
            .returning(|loc| Ok(stored(loc)));

        let service = LocationRecorder::new(Arc::new(repo), Arc::new(geo));
        let location = service.record(3, Some("8.8.8.8".to_string())).await.unwrap();

        assert_eq!(location.country.as_deref(), Some("India"));
        assert_eq!(location.state.as_deref(), Some("Kerala"));
    }

    #[tokio::test]
    async fn test_record_keeps_ip_when_lookup_fails() {
        let mut geo = MockGeoLocator::new();
        geo.expect_lookup().returning(|_| None);

        let mut repo = MockLocationRepository::new();
        repo.expect_create()
            .withf(|loc| loc.geo == GeoLocation::default())
            .times(1)
            .returning(|loc| Ok(stored(loc)));

        let service = LocationRecorder::new(Arc::new(repo), Arc::new(geo));
        let location = service.record(3, Some("10.0.0.1".to_string())).await.unwrap();

        assert_eq!(location.ip_address.as_deref(), Some("10.0.0.1"));
        assert!(location.country.is_none());
        assert!(location.latitude.is_none());
    }

    #[tokio::test]
    async fn test_record_without_ip_does_nothing() {
        let mut geo = MockGeoLocator::new();
        geo.expect_lookup().never();
        let mut repo = MockLocationRepository::new();
        repo.expect_create().never();

        let service = LocationRecorder::new(Arc::new(repo), Arc::new(geo));

        assert!(service.record(3, None).await.is_none());
        assert!(service.record(3, Some("garbage".to_string())).await.is_none());
    }

    #[tokio::test]
    async fn test_record_swallows_store_error() {
        let mut geo = MockGeoLocator::new();
        geo.expect_lookup().returning(|_| Some(india()));
        let mut repo = MockLocationRepository::new();
        repo.expect_create()
            .returning(|_| Err(AppError::internal("disk full")));

        let service = LocationRecorder::new(Arc::new(repo), Arc::new(geo));

        assert!(service.record(3, Some("8.8.8.8".to_string())).await.is_none());
    }
}
