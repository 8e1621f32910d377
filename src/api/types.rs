//! Result types for the geolocation surface

use crate::provider::RawLocation;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Callback invoked with a normalized position
pub type SuccessCallback = Box<dyn Fn(Position)>;

/// Callback invoked with a position error
pub type ErrorCallback = Box<dyn Fn(PositionError)>;

/// Normalized coordinate set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
    /// Altitude in meters
    pub altitude: f64,
    /// Horizontal accuracy in meters
    pub accuracy: f64,
    /// Not reported by the vendor SDK; always None
    pub altitude_accuracy: Option<f64>,
    /// Heading in degrees from true north
    pub heading: f64,
    /// Ground speed in meters per second
    pub speed: f64,
}

/// Normalized position result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub coords: Coordinates,
    /// Fix time in milliseconds since the Unix epoch
    pub timestamp: u64,
    /// Original provider payload, kept for provider-specific fields
    pub location: RawLocation,
}

impl Position {
    /// Field-by-field copy of a raw payload into the W3C shape
    pub fn from_raw(location: RawLocation) -> Self {
        Self {
            coords: Coordinates {
                latitude: location.latitude,
                longitude: location.longitude,
                altitude: location.altitude,
                accuracy: location.accuracy,
                altitude_accuracy: None,
                heading: location.heading,
                speed: location.speed,
            },
            timestamp: location.timestamp,
            location,
        }
    }
}

/// Acquisition failure reported through the error callback
///
/// Carries the raw failing location for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionError {
    /// Provider-supplied error code
    pub code: i32,
    /// Provider-supplied error description
    pub message: String,
    /// The raw payload that reported the failure
    pub location: RawLocation,
}

impl PositionError {
    pub fn new(code: i32, message: impl Into<String>, location: RawLocation) -> Self {
        Self {
            code,
            message: message.into(),
            location,
        }
    }

    /// Wrap a failing raw payload
    pub(crate) fn from_raw(location: &RawLocation) -> Self {
        Self {
            code: location.error_code.unwrap_or(0),
            message: location.error_info.clone().unwrap_or_default(),
            location: location.clone(),
        }
    }
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position error {}: {}", self.code, self.message)
    }
}

impl std::error::Error for PositionError {}

/// W3C-style request options
///
/// Accepted on both entry points for API compatibility. Acquisition tuning
/// lives on the provider, so these are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionOptions {
    pub enable_high_accuracy: bool,
    /// Maximum time to wait for a fix (milliseconds); None waits indefinitely
    pub timeout_ms: Option<u32>,
    /// Maximum acceptable age of a cached fix (milliseconds)
    pub maximum_age_ms: u32,
}

impl Default for PositionOptions {
    fn default() -> Self {
        Self {
            enable_high_accuracy: false,
            timeout_ms: None,
            maximum_age_ms: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_from_raw_field_mapping() {
        let raw = RawLocation {
            latitude: 1.0,
            longitude: 2.0,
            altitude: 3.0,
            accuracy: 4.0,
            heading: 5.0,
            speed: 6.0,
            timestamp: 7,
            ..Default::default()
        };

        let position = Position::from_raw(raw.clone());
        assert_eq!(
            position.coords,
            Coordinates {
                latitude: 1.0,
                longitude: 2.0,
                altitude: 3.0,
                accuracy: 4.0,
                altitude_accuracy: None,
                heading: 5.0,
                speed: 6.0,
            }
        );
        assert_eq!(position.timestamp, 7);
        assert_eq!(position.location, raw);
    }

    #[test]
    fn test_coordinates_serialize_null_altitude_accuracy() {
        let position = Position::from_raw(RawLocation::new(1.5, 2.5));
        let json = serde_json::to_value(&position.coords).unwrap();
        assert!(json.get("altitudeAccuracy").unwrap().is_null());
        assert_eq!(json.get("latitude").unwrap().as_f64(), Some(1.5));
    }

    #[test]
    fn test_position_error_from_raw() {
        let raw = RawLocation::default().with_error(6, "coarse location only");
        let error = PositionError::from_raw(&raw);
        assert_eq!(error.code, 6);
        assert_eq!(error.message, "coarse location only");
        assert_eq!(error.location, raw);
    }

    #[test]
    fn test_position_error_display() {
        let error = PositionError::new(2, "position unavailable", RawLocation::default());
        assert_eq!(error.to_string(), "position error 2: position unavailable");
    }
}
