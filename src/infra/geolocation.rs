//! IP geolocation client.
//!
//! Lookups are advisory: every failure (transport, status, body, provider
//! status) collapses to `None` and is only logged.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::GEOLOCATION_SUCCESS_STATUS;
use crate::domain::GeoLocation;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Geolocation lookup trait
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait GeoLocator: Send + Sync {
    /// Resolve an IP address, or `None` when nothing usable came back.
    async fn lookup(&self, ip: &str) -> Option<GeoLocation>;
}

/// Body returned by ip-api.com style providers
#[derive(Debug, Deserialize)]
struct IpApiResponse {
    status: Option<String>,
    country: Option<String>,
    #[serde(rename = "regionName")]
    region_name: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
}

impl From<IpApiResponse> for GeoLocation {
    fn from(body: IpApiResponse) -> Self {
        GeoLocation {
            country: body.country,
            state: body.region_name,
            latitude: body.lat,
            longitude: body.lon,
        }
    }
}

/// HTTP client for `GET {base_url}/json/{ip}`
pub struct IpApiClient {
    client: Client,
    base_url: String,
}

impl IpApiClient {
    /// Build a client whose requests give up after `timeout`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn lookup_url(&self, ip: &str) -> String {
        format!("{}/json/{}", self.base_url, ip)
    }
}

#[async_trait]
impl GeoLocator for IpApiClient {
    async fn lookup(&self, ip: &str) -> Option<GeoLocation> {
        let url = self.lookup_url(ip);

        let response = match self.client.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Geolocation request to {} failed: {}", url, e);
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            debug!("Geolocation provider returned {} for {}", response.status(), ip);
            return None;
        }

        let body: IpApiResponse = match response.json().await {
            Ok(b) => b,
            Err(e) => {
                warn!("Geolocation response for {} could not be parsed: {}", ip, e);
                return None;
            }
        };

        if body.status.as_deref() != Some(GEOLOCATION_SUCCESS_STATUS) {
            debug!("Geolocation provider could not resolve {}: {:?}", ip, body.status);
            return None;
        }

        Some(GeoLocation::from(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_url_strips_trailing_slash() {
        let client = IpApiClient::new("http://ip-api.com/", Duration::from_secs(5)).unwrap();
        assert_eq!(client.lookup_url("8.8.8.8"), "http://ip-api.com/json/8.8.8.8");
    }

    #[test]
    fn test_response_maps_region_name_to_state() {
        let body: IpApiResponse = serde_json::from_str(
            r#"{"status":"success","country":"India","regionName":"Kerala","lat":10.5,"lon":76.2}"#,
        )
        .unwrap();

        let geo = GeoLocation::from(body);
        assert_eq!(geo.country.as_deref(), Some("India"));
        assert_eq!(geo.state.as_deref(), Some("Kerala"));
        assert_eq!(geo.latitude, Some(10.5));
        assert_eq!(geo.longitude, Some(76.2));
    }
}
