use std::rc::Rc;

use platform_host::{HostStrategy, ThemeHost};

use crate::{WebColorSchemeSignal, WebCookieStore, WebDocumentRoot, WebGlobalEventDispatcher};

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Headless
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the browser [`ThemeHost`], observing `dark_media_query` for the OS signal.
///
/// Outside `wasm32` every adapter degrades to its no-document behavior.
pub fn theme_host(dark_media_query: &str) -> ThemeHost {
    ThemeHost {
        cookies: Rc::new(WebCookieStore),
        color_scheme: Rc::new(WebColorSchemeSignal::new(dark_media_query)),
        document: Rc::new(WebDocumentRoot),
        events: Rc::new(WebGlobalEventDispatcher),
        strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_host_behaves_headless() {
        let host = theme_host("(prefers-color-scheme: dark)");
        assert_eq!(host_strategy_name(), "headless");
        assert_eq!(host.strategy, HostStrategy::Headless);
        assert_eq!(host.color_scheme.prefers_dark(), None);
        assert_eq!(host.cookies.get("color-mode"), Ok(None));
        assert!(host.document.set_class("dark", true).is_err());
        assert_eq!(host.events.dispatch("color-mode-change", "{}"), Ok(()));
    }
}
