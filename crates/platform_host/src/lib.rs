//! Typed host-domain contracts used by the color-mode core and browser adapters.
//!
//! This crate is the API-first boundary for platform services. It exposes the cookie, OS
//! color-scheme, document-root, and global-event ports together with in-memory and no-op
//! implementations, while concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod color_scheme;
pub mod document;
mod error;
pub mod events;
pub mod host;
pub mod storage;

pub use color_scheme::{
    ColorSchemeListener, ColorSchemeSignal, MemoryColorSchemeSignal, NoopColorSchemeSignal,
};
pub use document::{DocumentRoot, DocumentSnapshot, MemoryDocumentRoot, NoopDocumentRoot};
pub use error::HostError;
pub use events::{
    DispatchedEvent, GlobalEventDispatcher, MemoryGlobalEventDispatcher,
    NoopGlobalEventDispatcher,
};
pub use host::{HostStrategy, MemoryThemeHost, ThemeHost};
pub use storage::cookies::{
    find_cookie, CookieAttributes, CookieStore, MemoryCookieStore, NoopCookieStore, SameSite,
    StoredCookie,
};
