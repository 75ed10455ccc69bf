//! Event listener registration with automatic cleanup.

use std::fmt::Formatter;

use web_sys::{
    wasm_bindgen::{convert::FromWasmAbi, prelude::Closure, JsCast},
    EventTarget,
};

use crate::error::Error;

/// A registered event listener.
///
/// Dropping the binding removes the listener from its target. Listeners
/// that should survive for the rest of the page are kept alive with
/// [`EventBinding::forget`].
pub(crate) struct EventBinding<T: 'static> {
    /// The event type the listener is registered for.
    event_type: &'static str,
    /// The target the listener is attached to.
    target: EventTarget,
    /// The closure handling the events.
    closure: Closure<dyn FnMut(T)>,
}

impl<T: 'static> EventBinding<T> {
    /// Creates a new [`EventBinding`] and attaches the listener.
    pub fn new<F>(
        target: &EventTarget,
        event_type: &'static str,
        callback: F,
    ) -> Result<Self, Error>
    where
        F: FnMut(T) + 'static,
        T: JsCast + FromWasmAbi,
    {
        let closure = Closure::<dyn FnMut(T)>::new(callback);
        target.add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            event_type,
            target: target.clone(),
            closure,
        })
    }

    /// Leaks the binding, leaving the listener attached for the lifetime
    /// of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl<T: 'static> Drop for EventBinding<T> {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            self.event_type,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

impl<T: 'static> std::fmt::Debug for EventBinding<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBinding")
            .field("event_type", &self.event_type)
            .field("target", &self.target)
            .finish()
    }
}
