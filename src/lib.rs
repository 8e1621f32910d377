//! Geolocation facade over a vendor location SDK
//!
//! Adapts an event-based location provider to the W3C Geolocation shape:
//! one-shot position requests, continuous watches, and watch removal by
//! integer handle. The provider owns acquisition; this crate shapes its
//! callback payloads and manages the table of active listeners.

pub mod api;
pub mod provider;

// Re-export commonly used types
pub use api::{
    Coordinates, ErrorCallback, Geolocation, Position, PositionError, PositionOptions,
    SuccessCallback, WatchId,
};
pub use provider::{
    ListenerId, LocationCallback, LocationMode, LocationProvider, MockProvider, ProviderOptions,
    RawLocation,
};
