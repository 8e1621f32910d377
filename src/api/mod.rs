//! W3C-shaped geolocation surface
//!
//! One-shot position requests, continuous watches, and watch removal by
//! integer handle, layered over a [`crate::provider::LocationProvider`].

pub mod geolocation;
pub mod types;

// Re-export commonly used API types
pub use geolocation::{Geolocation, WatchId};
pub use types::{
    Coordinates, ErrorCallback, Position, PositionError, PositionOptions, SuccessCallback,
};
