//! Per-instance view of the shared color-mode state.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{ColorModeRuntime, ModePreference, PersistedState, ResolvedMode, Subscription};

/// One UI instance's cached color-mode state and setter.
///
/// The cache is seeded from the store at construction and afterwards changes only through
/// broadcast delivery while the binding is active. [`ModeBinding::set_preference`] never writes
/// the cache directly, so the calling instance updates through the same path as every other one.
#[derive(Debug)]
pub struct ModeBinding {
    runtime: ColorModeRuntime,
    state: Rc<Cell<PersistedState>>,
    subscription: RefCell<Option<Subscription>>,
}

impl ModeBinding {
    /// Creates an inactive binding seeded from the stored state (or the system default).
    pub fn new(runtime: &ColorModeRuntime) -> Self {
        Self {
            runtime: runtime.clone(),
            state: Rc::new(Cell::new(runtime.store().read_or_default())),
            subscription: RefCell::new(None),
        }
    }

    /// Ensures the OS listener exists and starts receiving broadcasts.
    pub fn activate(&self) {
        self.activate_with(|_| {});
    }

    /// Like [`ModeBinding::activate`], additionally calling `observer` after each cache update.
    ///
    /// Activating an already active binding does nothing.
    pub fn activate_with(&self, observer: impl Fn(&PersistedState) + 'static) {
        if self.is_active() {
            return;
        }
        self.runtime.controller().ensure_system_listener_registered();
        let cached = self.state.clone();
        let subscription = self.runtime.bus().subscribe(move |event| {
            cached.set(*event);
            observer(event);
        });
        *self.subscription.borrow_mut() = Some(subscription);
    }

    /// Stops receiving broadcasts. The shared store and other instances are unaffected.
    pub fn deactivate(&self) {
        let subscription = self.subscription.borrow_mut().take();
        if let Some(subscription) = subscription {
            subscription.unsubscribe();
        }
    }

    /// Whether the binding currently receives broadcasts.
    pub fn is_active(&self) -> bool {
        self.subscription.borrow().is_some()
    }

    /// Cached state.
    pub fn state(&self) -> PersistedState {
        self.state.get()
    }

    /// Cached preference.
    pub fn preference(&self) -> ModePreference {
        self.state.get().preference
    }

    /// Cached resolved mode.
    pub fn mode(&self) -> ResolvedMode {
        self.state.get().mode
    }

    /// Persists, applies, and broadcasts `preference` to every active instance.
    pub fn set_preference(&self, preference: ModePreference) {
        self.runtime.set_preference(preference);
    }

    /// Advances to the next preference in the System -> Light -> Dark cycle.
    pub fn toggle(&self) {
        self.set_preference(self.preference().next());
    }
}
