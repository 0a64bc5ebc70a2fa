//! Single process-wide subscription to OS color-scheme changes.

use std::{cell::Cell, rc::Rc};

use crate::{ChangeBus, ModePreference, PersistedModeStore, PersistedState, ResolvedMode};

/// Owns the OS color-scheme listener.
///
/// The listener is attached at most once per registration guard, on the first
/// [`ModeController::ensure_system_listener_registered`] call made while the host can query the
/// signal, and is never detached. Clones share the guard, and every
/// [`ColorModeRuntime`](crate::ColorModeRuntime) on a thread shares one guard.
#[derive(Debug, Clone)]
pub struct ModeController {
    store: PersistedModeStore,
    bus: ChangeBus,
    initialized: Rc<Cell<bool>>,
}

impl ModeController {
    /// Creates an unregistered controller with its own guard.
    pub fn new(store: PersistedModeStore, bus: ChangeBus) -> Self {
        Self::with_guard(store, bus, Rc::default())
    }

    /// Creates a controller that registers only if `initialized` is still unset.
    pub(crate) fn with_guard(
        store: PersistedModeStore,
        bus: ChangeBus,
        initialized: Rc<Cell<bool>>,
    ) -> Self {
        Self {
            store,
            bus,
            initialized,
        }
    }

    /// Whether the OS listener has been claimed.
    pub fn is_registered(&self) -> bool {
        self.initialized.get()
    }

    /// Attaches the OS listener unless already attached or the host has no signal.
    pub fn ensure_system_listener_registered(&self) {
        if self.initialized.get() {
            return;
        }
        let signal = self.store.host().color_scheme.clone();
        if signal.prefers_dark().is_none() {
            log::debug!("OS color-scheme signal unavailable; system sync disabled");
            return;
        }
        self.initialized.set(true);

        let store = self.store.clone();
        let bus = self.bus.clone();
        let listener = Box::new(move |prefers_dark: bool| {
            sync_system_change(&store, &bus, prefers_dark);
        });
        if let Err(err) = signal.add_listener(listener) {
            log::warn!("OS color-scheme listener registration failed: {err}");
        }
    }
}

/// Handles one OS signal flip. Explicit preferences win over the OS.
fn sync_system_change(store: &PersistedModeStore, bus: &ChangeBus, prefers_dark: bool) {
    if let Some(stored) = store.read() {
        if stored.preference != ModePreference::System {
            log::trace!("OS color-scheme change ignored; preference is {}", stored.preference);
            return;
        }
    }
    let state = PersistedState::system(ResolvedMode::from_prefers_dark(prefers_dark));
    store.commit(&state);
    bus.broadcast(&state);
}
