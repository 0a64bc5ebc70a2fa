//! Cookie-backed persistence of the color-mode record plus OS detection and document application.

use std::rc::Rc;

use platform_host::{DocumentRoot, ThemeHost};

use crate::{ColorModeConfig, ColorModeError, ModePreference, PersistedState, ResolvedMode};

/// Decodes a raw cookie value read from `key` into a persisted state record.
///
/// # Errors
///
/// Returns [`ColorModeError::MalformedState`] when `raw` is not a `{preference, mode}` record.
pub fn decode_state(key: &str, raw: &str) -> Result<PersistedState, ColorModeError> {
    serde_json::from_str(raw).map_err(|source| ColorModeError::MalformedState {
        key: key.to_string(),
        source,
    })
}

/// The two root-element mutations that render a resolved mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootMutation {
    /// Whether the dark marker class is present.
    pub dark_class: bool,
    /// Value of the `color-scheme` style property.
    pub color_scheme: &'static str,
}

impl RootMutation {
    /// Mutation rendering `mode`.
    pub const fn for_mode(mode: ResolvedMode) -> Self {
        Self {
            dark_class: mode.is_dark(),
            color_scheme: mode.as_str(),
        }
    }
}

/// Applies `mode` to `document`. Failures are logged and otherwise ignored.
pub(crate) fn apply_to_root(
    document: &dyn DocumentRoot,
    config: &ColorModeConfig,
    mode: ResolvedMode,
) {
    let mutation = RootMutation::for_mode(mode);
    if let Err(err) = document.set_class(&config.dark_class, mutation.dark_class) {
        log::debug!("color-mode class update skipped: {err}");
    }
    if let Err(err) =
        document.set_style_property(&config.color_scheme_property, mutation.color_scheme)
    {
        log::debug!("color-mode style update skipped: {err}");
    }
}

/// Reads and writes the persisted color-mode record through the host cookie port.
#[derive(Debug, Clone)]
pub struct PersistedModeStore {
    host: ThemeHost,
    config: Rc<ColorModeConfig>,
}

impl PersistedModeStore {
    /// Creates a store over `host` using the names in `config`.
    pub fn new(host: ThemeHost, config: Rc<ColorModeConfig>) -> Self {
        Self { host, config }
    }

    /// Host services backing this store.
    pub fn host(&self) -> &ThemeHost {
        &self.host
    }

    /// Active configuration.
    pub fn config(&self) -> &ColorModeConfig {
        &self.config
    }

    /// Reads the current cookie, falling back to the legacy one.
    ///
    /// Absent, unreadable, and malformed values all yield `None`. A malformed current value does
    /// not fall through to the legacy cookie.
    pub fn read(&self) -> Option<PersistedState> {
        match self.try_read() {
            Ok(state) => state,
            Err(err) => {
                log::debug!("ignoring stored color mode: {err}");
                None
            }
        }
    }

    fn try_read(&self) -> Result<Option<PersistedState>, ColorModeError> {
        let cookies = &self.host.cookies;
        let current = &self.config.cookie_name;
        if let Some(raw) = cookies.get(current)? {
            return decode_state(current, &raw).map(Some);
        }
        let legacy = &self.config.legacy_cookie_name;
        match cookies.get(legacy)? {
            Some(raw) => decode_state(legacy, &raw).map(Some),
            None => Ok(None),
        }
    }

    /// Stored state, or `{system, <OS mode>}` when nothing readable is stored.
    pub fn read_or_default(&self) -> PersistedState {
        self.read()
            .unwrap_or_else(|| PersistedState::system(self.detect_system_mode()))
    }

    /// Writes `state` under the current cookie only. Never fails.
    pub fn write(&self, state: &PersistedState) {
        let raw = match serde_json::to_string(state) {
            Ok(raw) => raw,
            Err(err) => {
                log::warn!("color-mode state serialization failed: {err}");
                return;
            }
        };
        if let Err(err) = self.host.cookies.set(
            &self.config.cookie_name,
            &raw,
            &self.config.cookie_attributes(),
        ) {
            log::debug!("color-mode write skipped: {err}");
        }
    }

    /// Current OS mode; light when the signal cannot be queried.
    pub fn detect_system_mode(&self) -> ResolvedMode {
        self.host
            .color_scheme
            .prefers_dark()
            .map_or(ResolvedMode::Light, ResolvedMode::from_prefers_dark)
    }

    /// Renders `mode` on the document root.
    pub fn apply(&self, mode: ResolvedMode) {
        apply_to_root(self.host.document.as_ref(), &self.config, mode);
    }

    /// Writes `state` then applies its mode.
    pub fn commit(&self, state: &PersistedState) {
        self.write(state);
        self.apply(state.mode);
    }

    /// Resolves `preference` against the live OS signal.
    pub fn resolve(&self, preference: ModePreference) -> PersistedState {
        match preference.explicit_mode() {
            Some(mode) => PersistedState { preference, mode },
            None => PersistedState::system(self.detect_system_mode()),
        }
    }
}
