//! `matchMedia`-backed OS color-scheme signal.

use platform_host::{ColorSchemeListener, ColorSchemeSignal, HostError};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

#[derive(Debug, Clone, PartialEq, Eq)]
/// OS dark-scheme signal read through `window.matchMedia(query)`.
pub struct WebColorSchemeSignal {
    query: String,
}

impl WebColorSchemeSignal {
    /// Creates a signal for a dark-scheme media query such as `(prefers-color-scheme: dark)`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }

    /// Media query this signal evaluates.
    pub fn query(&self) -> &str {
        &self.query
    }

    #[cfg(target_arch = "wasm32")]
    fn media_query_list(&self) -> Option<web_sys::MediaQueryList> {
        web_sys::window()?.match_media(&self.query).ok().flatten()
    }
}

impl ColorSchemeSignal for WebColorSchemeSignal {
    fn prefers_dark(&self) -> Option<bool> {
        #[cfg(target_arch = "wasm32")]
        {
            self.media_query_list().map(|list| list.matches())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    fn add_listener(&self, listener: ColorSchemeListener) -> Result<(), HostError> {
        #[cfg(target_arch = "wasm32")]
        {
            let list = self
                .media_query_list()
                .ok_or_else(|| HostError::unavailable("color-scheme"))?;
            let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::wrap(Box::new(
                move |event: web_sys::MediaQueryListEvent| listener(event.matches()),
            ));
            list.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
                .map_err(|err| HostError::rejected("color-scheme", format!("{err:?}")))?;
            // Lives for the rest of the page.
            on_change.forget();
            log::debug!("listening for `{}` changes", self.query);
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = listener;
            Err(HostError::unavailable("color-scheme"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_signal_is_not_queryable() {
        let signal = WebColorSchemeSignal::new("(prefers-color-scheme: dark)");
        assert_eq!(signal.query(), "(prefers-color-scheme: dark)");
        assert_eq!(signal.prefers_dark(), None);
        assert_eq!(
            signal.add_listener(Box::new(|_| {})),
            Err(HostError::unavailable("color-scheme"))
        );
    }
}
