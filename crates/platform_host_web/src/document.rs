//! `document.documentElement`-backed document root.

use platform_host::{DocumentRoot, HostError};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[derive(Debug, Clone, Copy, Default)]
/// Browser document root (`<html>`).
pub struct WebDocumentRoot;

#[cfg(target_arch = "wasm32")]
fn root_element() -> Result<web_sys::HtmlElement, HostError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
        .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| HostError::unavailable("document"))
}

impl DocumentRoot for WebDocumentRoot {
    fn set_class(&self, class: &str, enabled: bool) -> Result<(), HostError> {
        #[cfg(target_arch = "wasm32")]
        {
            root_element()?
                .class_list()
                .toggle_with_force(class, enabled)
                .map(|_| ())
                .map_err(|err| HostError::rejected("document", format!("{err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (class, enabled);
            Err(HostError::unavailable("document"))
        }
    }

    fn set_style_property(&self, property: &str, value: &str) -> Result<(), HostError> {
        #[cfg(target_arch = "wasm32")]
        {
            root_element()?
                .style()
                .set_property(property, value)
                .map_err(|err| HostError::rejected("document", format!("{err:?}")))
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (property, value);
            Err(HostError::unavailable("document"))
        }
    }
}
