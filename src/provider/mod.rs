//! Provider abstraction for vendor location SDKs
//!
//! This module defines the capability boundary to the underlying SDK:
//! acquisition control, listener registration, and the raw payload it
//! delivers with each update.

pub mod interface;
pub mod mock;

pub use interface::{
    ListenerId, LocationCallback, LocationMode, LocationProvider, ProviderOptions,
};
pub use mock::MockProvider;

use serde::{Deserialize, Serialize};

/// Raw location payload as delivered by the provider
///
/// Error payloads reuse the same shape: a failed fix carries a non-zero
/// `error_code` and an `error_info` description. Reverse-geocode fields are
/// only populated once the SDK has resolved an address for the fix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawLocation {
    pub latitude: f64,
    pub longitude: f64,
    /// Altitude in meters
    pub altitude: f64,
    /// Horizontal accuracy in meters
    pub accuracy: f64,
    /// Heading in degrees from true north
    pub heading: f64,
    /// Ground speed in meters per second
    pub speed: f64,
    /// Fix time in milliseconds since the Unix epoch
    pub timestamp: u64,
    /// Full reverse-geocoded address
    pub address: Option<String>,
    pub country: Option<String>,
    pub province: Option<String>,
    pub city: Option<String>,
    pub city_code: Option<String>,
    pub district: Option<String>,
    pub street: Option<String>,
    pub street_number: Option<String>,
    pub ad_code: Option<String>,
    pub poi_name: Option<String>,
    /// Vendor error code; absent or zero means success
    pub error_code: Option<i32>,
    pub error_info: Option<String>,
}

impl Default for RawLocation {
    fn default() -> Self {
        Self {
            latitude: 0.0,
            longitude: 0.0,
            altitude: 0.0,
            accuracy: 0.0,
            heading: 0.0,
            speed: 0.0,
            timestamp: 0,
            address: None,
            country: None,
            province: None,
            city: None,
            city_code: None,
            district: None,
            street: None,
            street_number: None,
            ad_code: None,
            poi_name: None,
            error_code: None,
            error_info: None,
        }
    }
}

impl RawLocation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            ..Default::default()
        }
    }

    pub fn with_timestamp(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn with_error(mut self, code: i32, info: impl Into<String>) -> Self {
        self.error_code = Some(code);
        self.error_info = Some(info.into());
        self
    }

    /// Parse one payload as serialized by the vendor bridge
    pub fn from_json(payload: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(payload)
    }

    /// Check whether this payload reports a failed fix
    ///
    /// The SDK emits `error_code` 0 alongside successful fixes, so only a
    /// non-zero code counts as an error.
    pub fn is_error(&self) -> bool {
        matches!(self.error_code, Some(code) if code != 0)
    }
}
