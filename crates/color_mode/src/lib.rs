//! Light/dark/system color-mode synchronization for the `system_ui` component library.
//!
//! The crate persists the user's preference in a cookie-like slot, follows the OS dark-scheme
//! signal while the preference is "system", renders the resolved mode on the document root, and
//! keeps every mounted UI instance consistent through a synchronous in-process broadcast instead
//! of a shared provider. Host access goes through [`platform_host::ThemeHost`] ports.
//!
//! # Example
//!
//! ```rust
//! use color_mode::{ColorModeRuntime, ModePreference, ResolvedMode};
//! use platform_host::MemoryThemeHost;
//!
//! let memory = MemoryThemeHost::with_prefers_dark(Some(true));
//! let runtime = ColorModeRuntime::new(memory.host());
//!
//! let header = runtime.binding();
//! let settings = runtime.binding();
//! header.activate();
//! settings.activate();
//!
//! settings.set_preference(ModePreference::Light);
//! assert_eq!(header.mode(), ResolvedMode::Light);
//! assert!(!memory.document.snapshot().has_class("dark"));
//! ```

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod binding;
pub mod bootstrap;
mod bus;
mod config;
mod controller;
mod error;
mod model;
mod runtime;
mod store;

pub use binding::ModeBinding;
pub use bootstrap::{bootstrap_script, resolve_bootstrap_mode, run_bootstrap};
pub use bus::{ChangeBus, Subscription};
pub use config::{
    ColorModeConfig, CHANGE_EVENT, COLOR_MODE_COOKIE, COLOR_MODE_MAX_AGE_SECS,
    COLOR_SCHEME_PROPERTY, DARK_CLASS, DARK_MEDIA_QUERY, LEGACY_COLOR_MODE_COOKIE,
};
pub use controller::ModeController;
pub use error::ColorModeError;
pub use model::{ChangeEvent, ModePreference, PersistedState, ResolvedMode};
pub use runtime::{color_mode_runtime, install_runtime, ColorModeRuntime};
pub use store::{decode_state, PersistedModeStore, RootMutation};
