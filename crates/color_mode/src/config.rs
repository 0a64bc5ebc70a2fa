//! Keys, attributes, and DOM tokens shared by the runtime store and the inline bootstrap.

use platform_host::{CookieAttributes, SameSite};
use serde::{Deserialize, Serialize};

/// Cookie name holding the current persisted state.
pub const COLOR_MODE_COOKIE: &str = "color-mode";
/// Legacy cookie name accepted as a read-only fallback.
pub const LEGACY_COLOR_MODE_COOKIE: &str = "theme";
/// One year, in seconds.
pub const COLOR_MODE_MAX_AGE_SECS: u64 = 31_536_000;
/// Marker class toggled on the document root in dark mode.
pub const DARK_CLASS: &str = "dark";
/// Inline style property carrying the resolved mode.
pub const COLOR_SCHEME_PROPERTY: &str = "color-scheme";
/// Media query matched by a dark OS preference.
pub const DARK_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
/// Name of the broadcast emitted on every mode change.
pub const CHANGE_EVENT: &str = "color-mode-change";

/// Color-mode wiring configuration.
///
/// One value feeds the store, the controller, the browser signal adapter, and the generated
/// bootstrap script so that all of them agree on names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorModeConfig {
    /// Cookie written and read first.
    pub cookie_name: String,
    /// Cookie read when the current one is absent. Never written.
    pub legacy_cookie_name: String,
    /// Cookie path attribute.
    pub cookie_path: String,
    /// Cookie lifetime in seconds.
    pub max_age_secs: u64,
    /// Cookie `SameSite` policy.
    pub same_site: SameSite,
    /// Class toggled on the root element in dark mode.
    pub dark_class: String,
    /// Root style property set to the resolved mode.
    pub color_scheme_property: String,
    /// OS dark preference media query.
    pub dark_media_query: String,
    /// Broadcast event name.
    pub change_event: String,
}

impl Default for ColorModeConfig {
    fn default() -> Self {
        Self {
            cookie_name: COLOR_MODE_COOKIE.to_string(),
            legacy_cookie_name: LEGACY_COLOR_MODE_COOKIE.to_string(),
            cookie_path: "/".to_string(),
            max_age_secs: COLOR_MODE_MAX_AGE_SECS,
            same_site: SameSite::Lax,
            dark_class: DARK_CLASS.to_string(),
            color_scheme_property: COLOR_SCHEME_PROPERTY.to_string(),
            dark_media_query: DARK_MEDIA_QUERY.to_string(),
            change_event: CHANGE_EVENT.to_string(),
        }
    }
}

impl ColorModeConfig {
    /// Attributes attached to every persisted write.
    pub fn cookie_attributes(&self) -> CookieAttributes {
        CookieAttributes {
            path: self.cookie_path.clone(),
            max_age_secs: self.max_age_secs,
            same_site: self.same_site,
        }
    }
}
