//! Browser (`wasm32`) implementations of [`platform_host`] theme service contracts.
//!
//! This crate is the concrete browser-side host wiring layer for the cookie store, the
//! `matchMedia` color-scheme signal, the document root element, and page-level event dispatch.
//! Each adapter compiles on every target; outside `wasm32` it degrades to no-document behavior.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and the [`platform_host::ThemeHost`] factory.
pub mod adapters;
pub mod color_scheme;
pub mod document;
pub mod events;
pub mod storage;

pub use adapters::{host_strategy_name, selected_host_strategy, theme_host};
pub use color_scheme::WebColorSchemeSignal;
pub use document::WebDocumentRoot;
pub use events::WebGlobalEventDispatcher;
pub use storage::cookies::WebCookieStore;
