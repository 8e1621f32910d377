//! Geolocation facade over a location provider
//!
//! One-shot requests self-remove after their first success or error;
//! watches persist until explicitly cleared. The facade owns the watch
//! table and the handle counter; acquisition itself belongs to the
//! provider.

use crate::api::types::{
    ErrorCallback, Position, PositionError, PositionOptions, SuccessCallback,
};
use crate::provider::{ListenerId, LocationCallback, LocationProvider, RawLocation};
use std::cell::Cell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};
use tracing::{debug, trace};

/// Handle identifying an active watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(u32);

impl WatchId {
    fn new(id: u32) -> Self {
        WatchId(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}

/// Geolocation facade bound to a single provider
///
/// Watch handles are strictly increasing per facade instance and never
/// reused. The provider is shared through an `Rc` so that registered
/// one-shot listeners can stop acquisition and remove themselves from
/// within their own dispatch.
pub struct Geolocation<P: LocationProvider> {
    provider: Rc<P>,
    watch_counter: u32,
    watches: HashMap<WatchId, ListenerId>,
}

impl<P: LocationProvider + 'static> Geolocation<P> {
    pub fn new(provider: Rc<P>) -> Self {
        Self {
            provider,
            watch_counter: 0,
            watches: HashMap::new(),
        }
    }

    /// Request a single position fix
    ///
    /// At most one of `success`/`error` fires. Once a raw location settles
    /// the request, the result is reported, acquisition is stopped, and the
    /// subscription is removed, in that order. With reverse-geocoding
    /// requested on the provider, fixes that have not yet been resolved to
    /// an address are skipped and the request stays pending until an
    /// addressed fix arrives.
    ///
    /// Note that stopping acquisition also pauses any active watches until
    /// something starts the provider again.
    pub fn get_current_position(
        &self,
        success: SuccessCallback,
        error: Option<ErrorCallback>,
        options: Option<PositionOptions>,
    ) {
        trace!(?options, "one-shot position request");
        let registration: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));

        let listener: LocationCallback = {
            let provider = Rc::downgrade(&self.provider);
            let registration = Rc::clone(&registration);
            let fired = Cell::new(false);
            Rc::new(move |raw: &RawLocation| {
                if fired.get() {
                    return;
                }
                if raw.is_error() {
                    if let Some(error) = &error {
                        error(PositionError::from_raw(raw));
                    }
                    fired.set(true);
                    finish_one_shot(&provider, &registration);
                    return;
                }
                let awaiting_address = provider
                    .upgrade()
                    .map(|p| p.options().reverse_geocode && raw.address.is_none())
                    .unwrap_or(false);
                if awaiting_address {
                    trace!("fix arrived before its reverse-geocoded address; waiting");
                    return;
                }
                success(Position::from_raw(raw.clone()));
                fired.set(true);
                finish_one_shot(&provider, &registration);
            })
        };

        let id = self.provider.add_location_listener(listener);
        registration.set(Some(id));
        debug!(listener = id.id(), "one-shot listener registered");
        self.provider.start();
    }

    /// Register a continuous watch and return its handle
    ///
    /// The handle is returned synchronously, before any location arrives.
    /// Every subsequent raw location invokes the corresponding callback;
    /// the subscription is never removed automatically.
    pub fn watch_position(
        &mut self,
        success: SuccessCallback,
        error: Option<ErrorCallback>,
        options: Option<PositionOptions>,
    ) -> WatchId {
        trace!(?options, "watch requested");
        self.watch_counter += 1;
        let watch_id = WatchId::new(self.watch_counter);

        let listener: LocationCallback = Rc::new(move |raw: &RawLocation| {
            if raw.is_error() {
                if let Some(error) = &error {
                    error(PositionError::from_raw(raw));
                }
            } else {
                success(Position::from_raw(raw.clone()));
            }
        });

        let listener_id = self.provider.add_location_listener(listener);
        self.watches.insert(watch_id, listener_id);
        self.provider.start();
        debug!(
            watch = watch_id.id(),
            listener = listener_id.id(),
            "watch registered"
        );
        watch_id
    }

    /// Remove a watch; unknown ids are a no-op
    ///
    /// Acquisition is left running. Whether remaining listeners keep the
    /// provider acquiring is the provider's concern, not the facade's.
    pub fn clear_watch(&mut self, id: WatchId) {
        match self.watches.remove(&id) {
            Some(listener_id) => {
                self.provider.remove_location_listener(listener_id);
                debug!(watch = id.id(), "watch cleared");
            }
            None => trace!(watch = id.id(), "clear_watch for unknown id"),
        }
    }

    /// Number of active watches
    pub fn active_watch_count(&self) -> usize {
        self.watches.len()
    }

    /// The underlying provider
    pub fn provider(&self) -> &Rc<P> {
        &self.provider
    }
}

/// Tear down a settled one-shot subscription
///
/// Acquisition must stop before the listener is removed: consumers may
/// start a new request from inside the result callback, and the old
/// listener has to be unreachable by then.
fn finish_one_shot<P: LocationProvider>(
    provider: &Weak<P>,
    registration: &Rc<Cell<Option<ListenerId>>>,
) {
    if let Some(provider) = provider.upgrade() {
        provider.stop();
        if let Some(id) = registration.get() {
            provider.remove_location_listener(id);
        }
    }
}
