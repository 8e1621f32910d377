//! Location provider trait and acquisition options

use crate::provider::RawLocation;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Callback invoked by a provider with each raw location update
pub type LocationCallback = Rc<dyn Fn(&RawLocation)>;

/// Handle identifying a listener registered with a provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    pub(crate) fn new(id: u64) -> Self {
        ListenerId(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Capability boundary to the vendor location SDK
///
/// Methods take `&self`: implementations use interior mutability so that a
/// listener may call back into the provider (`stop`,
/// `remove_location_listener`) while it is being dispatched. Dispatch must
/// therefore snapshot the listener table before invoking callbacks.
pub trait LocationProvider {
    /// Begin acquisition; a no-op if already running
    fn start(&self);

    /// End acquisition
    fn stop(&self);

    /// Register a callback invoked with each raw location update
    fn add_location_listener(&self, callback: LocationCallback) -> ListenerId;

    /// Unregister a listener; returns false if the id is unknown
    fn remove_location_listener(&self, id: ListenerId) -> bool;

    /// Current acquisition options
    fn options(&self) -> ProviderOptions;
}

/// Acquisition options for a location provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderOptions {
    /// Request a reverse-geocoded address with each fix
    pub reverse_geocode: bool,
    /// Interval between continuous fixes (milliseconds)
    pub interval_ms: u32,
    /// Timeout for a single fix (milliseconds)
    pub timeout_ms: u32,
    /// Positioning mode
    pub mode: LocationMode,
}

impl Default for ProviderOptions {
    fn default() -> Self {
        Self {
            reverse_geocode: false,
            interval_ms: 2000,
            timeout_ms: 10_000,
            mode: LocationMode::HighAccuracy,
        }
    }
}

impl ProviderOptions {
    /// Options with reverse-geocoding requested
    pub fn with_regeocode() -> Self {
        Self {
            reverse_geocode: true,
            ..Default::default()
        }
    }
}

/// Positioning mode selection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LocationMode {
    /// Network and satellite fixes combined
    HighAccuracy,
    /// Network-only fixes
    BatterySaving,
    /// Satellite-only fixes
    DeviceSensors,
}
