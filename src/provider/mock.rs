//! Mock location provider for testing and development

use crate::provider::{
    ListenerId, LocationCallback, LocationProvider, ProviderOptions, RawLocation,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Mock provider that dispatches caller-supplied locations to its listeners
///
/// Acquisition is a running flag plus start/stop counters so tests can
/// assert on the side effects of the facade. `emit` stands in for the SDK's
/// own notification tick.
pub struct MockProvider {
    options: RefCell<ProviderOptions>,
    listeners: RefCell<Vec<(ListenerId, LocationCallback)>>,
    listener_counter: Cell<u64>,
    running: Cell<bool>,
    start_count: Cell<u32>,
    stop_count: Cell<u32>,
}

impl MockProvider {
    pub fn new(options: ProviderOptions) -> Self {
        Self {
            options: RefCell::new(options),
            listeners: RefCell::new(Vec::new()),
            listener_counter: Cell::new(0),
            running: Cell::new(false),
            start_count: Cell::new(0),
            stop_count: Cell::new(0),
        }
    }

    /// Replace the acquisition options
    pub fn set_options(&self, options: ProviderOptions) {
        *self.options.borrow_mut() = options;
    }

    /// Deliver a location to every currently registered listener
    ///
    /// The listener table is snapshotted first, so a listener may remove
    /// itself (or stop acquisition) from inside its own invocation.
    pub fn emit(&self, location: &RawLocation) {
        let snapshot: Vec<LocationCallback> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, callback)| Rc::clone(callback))
            .collect();

        for callback in snapshot {
            callback(location);
        }
    }

    /// Deliver a failed fix with the given vendor code
    pub fn emit_error(&self, code: i32, info: &str) {
        self.emit(&RawLocation::default().with_error(code, info));
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn start_count(&self) -> u32 {
        self.start_count.get()
    }

    pub fn stop_count(&self) -> u32 {
        self.stop_count.get()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new(ProviderOptions::default())
    }
}

impl LocationProvider for MockProvider {
    fn start(&self) {
        self.start_count.set(self.start_count.get() + 1);
        self.running.set(true);
    }

    fn stop(&self) {
        self.stop_count.set(self.stop_count.get() + 1);
        self.running.set(false);
    }

    fn add_location_listener(&self, callback: LocationCallback) -> ListenerId {
        let next = self.listener_counter.get() + 1;
        self.listener_counter.set(next);
        let id = ListenerId::new(next);
        self.listeners.borrow_mut().push((id, callback));
        id
    }

    fn remove_location_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    fn options(&self) -> ProviderOptions {
        self.options.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_mock_provider_creation() {
        let provider = MockProvider::default();
        assert!(!provider.is_running());
        assert_eq!(provider.listener_count(), 0);
        assert_eq!(provider.start_count(), 0);
    }

    #[test]
    fn test_start_stop_counts() {
        let provider = MockProvider::default();
        provider.start();
        provider.start();
        assert!(provider.is_running());
        assert_eq!(provider.start_count(), 2);

        provider.stop();
        assert!(!provider.is_running());
        assert_eq!(provider.stop_count(), 1);
    }

    #[test]
    fn test_listener_ids_increment() {
        let provider = MockProvider::default();
        let first = provider.add_location_listener(Rc::new(|_| {}));
        let second = provider.add_location_listener(Rc::new(|_| {}));
        assert_eq!(second.id(), first.id() + 1);
        assert_eq!(provider.listener_count(), 2);
    }

    #[test]
    fn test_remove_listener() {
        let provider = MockProvider::default();
        let id = provider.add_location_listener(Rc::new(|_| {}));
        assert!(provider.remove_location_listener(id));
        assert_eq!(provider.listener_count(), 0);

        // Unknown and already-removed ids report false
        assert!(!provider.remove_location_listener(id));
        assert!(!provider.remove_location_listener(ListenerId::new(99)));
    }

    #[test]
    fn test_emit_reaches_all_listeners() {
        let provider = MockProvider::default();
        let seen: Rc<RefCell<Vec<u64>>> = Rc::new(RefCell::new(Vec::new()));

        for tag in [1u64, 2] {
            let sink = Rc::clone(&seen);
            provider.add_location_listener(Rc::new(move |location: &RawLocation| {
                sink.borrow_mut().push(tag * 1000 + location.timestamp);
            }));
        }

        provider.emit(&RawLocation::new(1.0, 2.0).with_timestamp(7));
        assert_eq!(*seen.borrow(), vec![1007, 2007]);
    }

    #[test]
    fn test_emit_error_payload() {
        let provider = MockProvider::default();
        let seen: Rc<RefCell<Vec<RawLocation>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        provider.add_location_listener(Rc::new(move |location: &RawLocation| {
            sink.borrow_mut().push(location.clone());
        }));

        provider.emit_error(12, "missing location permission");
        let received = seen.borrow();
        assert!(received[0].is_error());
        assert_eq!(received[0].error_code, Some(12));
    }

    #[test]
    fn test_reentrant_removal_during_dispatch() {
        let provider = Rc::new(MockProvider::default());
        let registration: Rc<Cell<Option<ListenerId>>> = Rc::new(Cell::new(None));
        let hits = Rc::new(Cell::new(0u32));

        let weak = Rc::downgrade(&provider);
        let slot = Rc::clone(&registration);
        let counter = Rc::clone(&hits);
        let id = provider.add_location_listener(Rc::new(move |_| {
            counter.set(counter.get() + 1);
            if let (Some(provider), Some(id)) = (weak.upgrade(), slot.get()) {
                provider.stop();
                provider.remove_location_listener(id);
            }
        }));
        registration.set(Some(id));

        provider.start();
        provider.emit(&RawLocation::new(0.0, 0.0));
        assert_eq!(hits.get(), 1);
        assert_eq!(provider.listener_count(), 0);
        assert!(!provider.is_running());

        // The listener is gone, so further emits are silent
        provider.emit(&RawLocation::new(0.0, 0.0));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_set_options_is_live() {
        let provider = MockProvider::default();
        assert!(!provider.options().reverse_geocode);
        provider.set_options(ProviderOptions::with_regeocode());
        assert!(provider.options().reverse_geocode);
    }
}
