//! `window.dispatchEvent(CustomEvent)`-backed global event dispatcher.

use platform_host::{GlobalEventDispatcher, HostError};

#[derive(Debug, Clone, Copy, Default)]
/// Dispatches page-level `CustomEvent`s on `window`, with the parsed JSON payload as `detail`.
pub struct WebGlobalEventDispatcher;

impl GlobalEventDispatcher for WebGlobalEventDispatcher {
    fn dispatch(&self, name: &str, detail_json: &str) -> Result<(), HostError> {
        #[cfg(target_arch = "wasm32")]
        {
            let window = web_sys::window().ok_or_else(|| HostError::unavailable("events"))?;
            let detail = js_sys::JSON::parse(detail_json)
                .map_err(|err| HostError::rejected("events", format!("{err:?}")))?;
            let init = web_sys::CustomEventInit::new();
            init.set_detail(&detail);
            let event = web_sys::CustomEvent::new_with_event_init_dict(name, &init)
                .map_err(|err| HostError::rejected("events", format!("{err:?}")))?;
            window
                .dispatch_event(&event)
                .map(|_| ())
                .map_err(|err| HostError::rejected("events", format!("{err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, detail_json);
            Ok(())
        }
    }
}
