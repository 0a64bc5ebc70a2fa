mod web_app;

use color_mode::{install_runtime, ColorModeConfig, ColorModeRuntime, ResolvedMode};
use platform_host::ThemeHost;

pub use web_app::SiteApp;

/// Builds the page runtime over `host`, paints the stored mode, and installs it as the default.
///
/// Painting happens before anything mounts so the first frame already has the right scheme.
pub fn boot_color_mode(host: ThemeHost, config: ColorModeConfig) -> (ColorModeRuntime, ResolvedMode) {
    let runtime = ColorModeRuntime::with_config(host, config);
    let painted = runtime.bootstrap();
    log::info!(
        "color mode painted {painted} on {} host",
        runtime.store().host().strategy.as_str()
    );
    install_runtime(runtime.clone());
    (runtime, painted)
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn mount() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    if let Err(err) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger unavailable: {err}");
    }

    let config = ColorModeConfig::default();
    let host = platform_host_web::theme_host(&config.dark_media_query);
    let (runtime, _) = boot_color_mode(host, config);
    leptos::mount_to_body(move || leptos::view! { <SiteApp runtime=runtime.clone() /> })
}
