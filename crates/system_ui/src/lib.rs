//! Leptos primitives and components for color-mode selection.
//!
//! Components render the stable `data-ui-*` DOM contract so styling layers can target them
//! without depending on markup details. All state flows through the shared
//! [`color_mode::ColorModeRuntime`]; components never touch cookies or the document directly.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod mode_controls;
mod primitives;

pub use mode_controls::{
    use_color_mode, ColorModeHandle, ColorModeProvider, ColorModeScript, ColorModeSwitcher,
    ColorModeToggle,
};
pub use primitives::{Button, ButtonSize, ButtonVariant, SegmentedControl, SegmentedControlOption};

/// Convenience imports for crates composing the color-mode components.
pub mod prelude {
    pub use crate::{
        use_color_mode, Button, ButtonSize, ButtonVariant, ColorModeHandle, ColorModeProvider,
        ColorModeScript, ColorModeSwitcher, ColorModeToggle, SegmentedControl,
        SegmentedControlOption,
    };
}
