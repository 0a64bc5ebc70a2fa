//! Process-global named event dispatch contracts and adapters.

use std::{cell::RefCell, rc::Rc};

use crate::HostError;

/// Host service that publishes a named event with a JSON payload to page-level listeners.
pub trait GlobalEventDispatcher {
    /// Dispatches `name` with `detail_json` as the event payload.
    ///
    /// # Errors
    ///
    /// Returns an error when the host has no global event target or rejects the payload.
    fn dispatch(&self, name: &str, detail_json: &str) -> Result<(), HostError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Dispatcher that drops every event.
pub struct NoopGlobalEventDispatcher;

impl GlobalEventDispatcher for NoopGlobalEventDispatcher {
    fn dispatch(&self, _name: &str, _detail_json: &str) -> Result<(), HostError> {
        Ok(())
    }
}

/// Event captured by [`MemoryGlobalEventDispatcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchedEvent {
    /// Event name.
    pub name: String,
    /// Raw JSON payload.
    pub detail_json: String,
}

#[derive(Debug, Clone, Default)]
/// Recording dispatcher. Clones share the log.
pub struct MemoryGlobalEventDispatcher {
    inner: Rc<RefCell<Vec<DispatchedEvent>>>,
}

impl MemoryGlobalEventDispatcher {
    /// Returns every dispatched event in order.
    pub fn events(&self) -> Vec<DispatchedEvent> {
        self.inner.borrow().clone()
    }
}

impl GlobalEventDispatcher for MemoryGlobalEventDispatcher {
    fn dispatch(&self, name: &str, detail_json: &str) -> Result<(), HostError> {
        self.inner.borrow_mut().push(DispatchedEvent {
            name: name.to_string(),
            detail_json: detail_json.to_string(),
        });
        Ok(())
    }
}
