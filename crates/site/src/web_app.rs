use color_mode::ColorModeRuntime;
use leptos::*;
use leptos_meta::*;
use system_ui::prelude::*;

#[component]
pub fn SiteApp(runtime: ColorModeRuntime) -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Color mode" />
        <Meta name="description" content="Light, dark, and system color modes kept in sync." />

        <ColorModeProvider runtime=runtime>
            <header class="site-header">
                <h1>"Color mode"</h1>
                <ColorModeToggle />
            </header>
            <main class="site-root">
                <SettingsPanel />
                <ModeStatus />
            </main>
        </ColorModeProvider>
    }
}

#[component]
fn SettingsPanel() -> impl IntoView {
    view! {
        <section class="site-settings">
            <h2>"Appearance"</h2>
            <ColorModeSwitcher aria_label="Appearance" />
        </section>
    }
}

#[component]
fn ModeStatus() -> impl IntoView {
    let color_mode = use_color_mode();
    let preference = color_mode.preference();
    let mode = color_mode.mode();

    view! {
        <p class="site-status" data-mode=move || mode.get().as_str()>
            {move || format!("Preference {}, rendering {}", preference.get(), mode.get())}
        </p>
    }
}
