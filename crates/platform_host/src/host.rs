//! Host service bundle injected into the color-mode runtime.

use std::rc::Rc;

use crate::{
    ColorSchemeSignal, CookieStore, DocumentRoot, GlobalEventDispatcher, MemoryColorSchemeSignal,
    MemoryCookieStore, MemoryDocumentRoot, MemoryGlobalEventDispatcher, NoopColorSchemeSignal,
    NoopCookieStore, NoopDocumentRoot, NoopGlobalEventDispatcher,
};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed adapters.
    Browser,
    /// Server rendering or any other target without a document.
    Headless,
    /// In-memory adapters used by tests and previews.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics and runtime inspection.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
            Self::Memory => "memory",
        }
    }
}

/// Runtime-selected host services consumed by the color-mode core.
///
/// All environment-specific selection happens before this bundle crosses into `color_mode`, which
/// keeps the core decoupled from browser adapter details.
#[derive(Clone)]
pub struct ThemeHost {
    /// Persistent cookie-like key/value slot.
    pub cookies: Rc<dyn CookieStore>,
    /// OS dark-scheme signal.
    pub color_scheme: Rc<dyn ColorSchemeSignal>,
    /// Document root element.
    pub document: Rc<dyn DocumentRoot>,
    /// Page-level named event dispatch.
    pub events: Rc<dyn GlobalEventDispatcher>,
    /// Stable strategy identifier for diagnostics.
    pub strategy: HostStrategy,
}

impl ThemeHost {
    /// Host with no document, cookie, or media-query capability (server rendering, native tests).
    pub fn headless() -> Self {
        Self {
            cookies: Rc::new(NoopCookieStore),
            color_scheme: Rc::new(NoopColorSchemeSignal),
            document: Rc::new(NoopDocumentRoot),
            events: Rc::new(NoopGlobalEventDispatcher),
            strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for ThemeHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeHost")
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}

/// In-memory host whose parts stay inspectable after being bundled into a [`ThemeHost`].
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeHost {
    /// Cookie store.
    pub cookies: MemoryCookieStore,
    /// Scriptable OS signal.
    pub color_scheme: MemoryColorSchemeSignal,
    /// Recording document root.
    pub document: MemoryDocumentRoot,
    /// Recording event dispatcher.
    pub events: MemoryGlobalEventDispatcher,
}

impl MemoryThemeHost {
    /// Creates a memory host whose OS signal starts at `prefers_dark` (`None` = not queryable).
    pub fn with_prefers_dark(prefers_dark: Option<bool>) -> Self {
        Self {
            color_scheme: MemoryColorSchemeSignal::new(prefers_dark),
            ..Self::default()
        }
    }

    /// Bundles shared handles to every part into a [`ThemeHost`].
    pub fn host(&self) -> ThemeHost {
        ThemeHost {
            cookies: Rc::new(self.cookies.clone()),
            color_scheme: Rc::new(self.color_scheme.clone()),
            document: Rc::new(self.document.clone()),
            events: Rc::new(self.events.clone()),
            strategy: HostStrategy::Memory,
        }
    }
}
