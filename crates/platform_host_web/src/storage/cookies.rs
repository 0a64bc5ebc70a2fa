//! `document.cookie`-backed cookie store implementation.
//!
//! Values are URI-component encoded on write and decoded on read, matching what an inline
//! `decodeURIComponent` reader expects.

use platform_host::{CookieAttributes, CookieStore, HostError};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, Default)]
/// Browser cookie store backed by `document.cookie`.
pub struct WebCookieStore;

#[cfg(target_arch = "wasm32")]
fn html_document() -> Result<web_sys::HtmlDocument, HostError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or_else(|| HostError::unavailable("cookies"))
}

impl CookieStore for WebCookieStore {
    fn get(&self, name: &str) -> Result<Option<String>, HostError> {
        #[cfg(target_arch = "wasm32")]
        {
            let header = html_document()?
                .cookie()
                .map_err(|err| HostError::rejected("cookies", format!("{err:?}")))?;
            let Some(raw) = platform_host::find_cookie(&header, name) else {
                return Ok(None);
            };
            let decoded = js_sys::decode_uri_component(raw)
                .map_err(|err| HostError::rejected("cookies", format!("{err:?}")))?;
            Ok(Some(String::from(decoded)))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = name;
            Ok(None)
        }
    }

    fn set(
        &self,
        name: &str,
        value: &str,
        attributes: &CookieAttributes,
    ) -> Result<(), HostError> {
        #[cfg(target_arch = "wasm32")]
        {
            let encoded = String::from(js_sys::encode_uri_component(value));
            html_document()?
                .set_cookie(&attributes.assignment(name, &encoded))
                .map_err(|err| HostError::rejected("cookies", format!("{err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (name, value, attributes);
            Ok(())
        }
    }
}
