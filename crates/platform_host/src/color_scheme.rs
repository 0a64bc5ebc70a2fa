//! OS-level color-scheme signal contracts and adapters.

use std::{cell::RefCell, rc::Rc};

use crate::HostError;

/// Callback invoked with the new "prefers dark" value whenever the OS signal flips.
pub type ColorSchemeListener = Box<dyn Fn(bool)>;

/// Host service exposing the OS/browser dark color-scheme preference.
pub trait ColorSchemeSignal {
    /// Returns whether the OS currently prefers a dark scheme, or `None` when the signal cannot be
    /// queried on this host.
    fn prefers_dark(&self) -> Option<bool>;

    /// Attaches a change listener for the remaining lifetime of the host.
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot observe the signal.
    fn add_listener(&self, listener: ColorSchemeListener) -> Result<(), HostError>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Signal source for hosts without a media-query capability.
pub struct NoopColorSchemeSignal;

impl ColorSchemeSignal for NoopColorSchemeSignal {
    fn prefers_dark(&self) -> Option<bool> {
        None
    }

    fn add_listener(&self, _listener: ColorSchemeListener) -> Result<(), HostError> {
        Err(HostError::unavailable("color-scheme"))
    }
}

/// Scriptable in-memory signal. Clones share state.
#[derive(Clone)]
pub struct MemoryColorSchemeSignal {
    inner: Rc<RefCell<MemorySignal>>,
}

struct MemorySignal {
    prefers_dark: Option<bool>,
    listeners: Vec<Rc<dyn Fn(bool)>>,
}

impl std::fmt::Debug for MemoryColorSchemeSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("MemoryColorSchemeSignal")
            .field("prefers_dark", &inner.prefers_dark)
            .field("listeners", &inner.listeners.len())
            .finish()
    }
}

impl Default for MemoryColorSchemeSignal {
    fn default() -> Self {
        Self::new(Some(false))
    }
}

impl MemoryColorSchemeSignal {
    /// Creates a signal with an initial value; `None` simulates a host without the capability.
    pub fn new(prefers_dark: Option<bool>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemorySignal {
                prefers_dark,
                listeners: Vec::new(),
            })),
        }
    }

    /// Flips the simulated OS preference and notifies every listener in registration order.
    pub fn set_prefers_dark(&self, prefers_dark: bool) {
        let listeners = {
            let mut inner = self.inner.borrow_mut();
            inner.prefers_dark = Some(prefers_dark);
            inner.listeners.clone()
        };
        for listener in listeners {
            listener(prefers_dark);
        }
    }

    /// Number of attached listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl ColorSchemeSignal for MemoryColorSchemeSignal {
    fn prefers_dark(&self) -> Option<bool> {
        self.inner.borrow().prefers_dark
    }

    fn add_listener(&self, listener: ColorSchemeListener) -> Result<(), HostError> {
        let mut inner = self.inner.borrow_mut();
        if inner.prefers_dark.is_none() {
            return Err(HostError::unavailable("color-scheme"));
        }
        inner.listeners.push(Rc::from(listener));
        Ok(())
    }
}
