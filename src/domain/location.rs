//! Observed network origin of a write request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Location fields resolved from an IP address. Any of them may be unknown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub country: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Location row to append for a user.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUserLocation {
    pub user_id: i32,
    pub ip_address: String,
    pub geo: GeoLocation,
}

impl NewUserLocation {
    /// Location with whatever geolocation data was found (possibly none).
    pub fn new(user_id: i32, ip_address: impl Into<String>, geo: Option<GeoLocation>) -> Self {
        Self {
            user_id,
            ip_address: ip_address.into(),
            geo: geo.unwrap_or_default(),
        }
    }
}

/// Stored location observation. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserLocation {
    pub id: i32,
    pub user_id: i32,
    pub ip_address: Option<String>,
    pub country: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: DateTime<Utc>,
}
