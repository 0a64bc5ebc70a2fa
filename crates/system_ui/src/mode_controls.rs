//! Leptos bindings for the shared color-mode runtime.

use std::rc::Rc;

use ::color_mode::{
    bootstrap_script, color_mode_runtime, ColorModeConfig, ColorModeRuntime, ModeBinding,
    ModePreference, PersistedState, ResolvedMode,
};
use leptos::ev::MouseEvent;
use leptos::*;
use platform_host::HostStrategy;

use crate::primitives::{Button, ButtonVariant, SegmentedControl, SegmentedControlOption};

/// Reactive handle returned by [`use_color_mode`].
///
/// The handle is `Copy` and stays valid for the lifetime of the owning reactive scope.
#[derive(Clone, Copy)]
pub struct ColorModeHandle {
    state: RwSignal<PersistedState>,
    binding: StoredValue<Rc<ModeBinding>>,
}

impl ColorModeHandle {
    /// Current state as seen by this instance.
    pub fn state(&self) -> Signal<PersistedState> {
        self.state.into()
    }

    /// Current preference.
    pub fn preference(&self) -> Signal<ModePreference> {
        let state = self.state;
        Signal::derive(move || state.get().preference)
    }

    /// Current resolved mode.
    pub fn mode(&self) -> Signal<ResolvedMode> {
        let state = self.state;
        Signal::derive(move || state.get().mode)
    }

    /// Persists and broadcasts `preference`; every mounted instance updates before this returns.
    pub fn set_preference(&self, preference: ModePreference) {
        self.binding
            .with_value(|binding| binding.set_preference(preference));
    }

    /// Advances to the next preference in the System -> Light -> Dark cycle.
    pub fn toggle(&self) {
        self.binding.with_value(|binding| binding.toggle());
    }
}

/// Binds the calling component to the color-mode runtime.
///
/// Uses the runtime provided by [`ColorModeProvider`] when present, otherwise the process
/// default. The binding is released when the owning scope is cleaned up.
pub fn use_color_mode() -> ColorModeHandle {
    let runtime = use_context::<ColorModeRuntime>().unwrap_or_else(color_mode_runtime);
    if let Some(warning) = headless_warning(&runtime) {
        logging::warn!("{warning}");
    }
    bind_color_mode(&runtime)
}

fn headless_warning(runtime: &ColorModeRuntime) -> Option<String> {
    let strategy = runtime.store().host().strategy;
    (strategy == HostStrategy::Headless).then(|| {
        format!(
            "color-mode components bound to a {} host; install a runtime before mounting",
            strategy.as_str()
        )
    })
}

fn bind_color_mode(runtime: &ColorModeRuntime) -> ColorModeHandle {
    let binding = Rc::new(runtime.binding());
    let state = create_rw_signal(binding.state());
    binding.activate_with(move |next| state.set(*next));
    on_cleanup({
        let binding = binding.clone();
        move || binding.deactivate()
    });

    ColorModeHandle {
        state,
        binding: store_value(binding),
    }
}

#[component]
/// Makes `runtime` the color-mode runtime for all descendants.
pub fn ColorModeProvider(
    /// Runtime shared by every descendant using [`use_color_mode`].
    runtime: ColorModeRuntime,
    children: Children,
) -> impl IntoView {
    provide_context(runtime);
    children()
}

fn preference_label(preference: ModePreference) -> &'static str {
    match preference {
        ModePreference::System => "System",
        ModePreference::Light => "Light",
        ModePreference::Dark => "Dark",
    }
}

#[component]
/// Three-way System / Light / Dark selector.
pub fn ColorModeSwitcher(
    /// Accessible group label.
    #[prop(optional, into)]
    aria_label: Option<String>,
) -> impl IntoView {
    let color_mode = use_color_mode();
    let preference = color_mode.preference();
    let aria_label = aria_label.unwrap_or_else(|| "Color mode".to_string());

    view! {
        <SegmentedControl
            layout_class="ui-color-mode-switcher"
            aria_label=aria_label
            ui_slot="color-mode"
        >
            {ModePreference::ALL
                .into_iter()
                .map(|option| {
                    view! {
                        <SegmentedControlOption
                            aria_label=preference_label(option).to_string()
                            ui_slot=option.as_str()
                            selected=Signal::derive(move || preference.get() == option)
                            on_click=Callback::new(move |_: MouseEvent| {
                                color_mode.set_preference(option)
                            })
                        >
                            {preference_label(option)}
                        </SegmentedControlOption>
                    }
                })
                .collect_view()}
        </SegmentedControl>
    }
}

#[component]
/// Single button cycling System -> Light -> Dark.
pub fn ColorModeToggle() -> impl IntoView {
    let color_mode = use_color_mode();
    let preference = color_mode.preference();
    let mode = color_mode.mode();
    let label = Signal::derive(move || {
        format!(
            "Color mode: {} (switch to {})",
            preference_label(preference.get()),
            preference_label(preference.get().next())
        )
    });

    view! {
        <Button
            variant=ButtonVariant::Quiet
            layout_class="ui-color-mode-toggle"
            aria_label=label
            title=label
            ui_slot="color-mode-toggle"
            pressed=Signal::derive(move || mode.get().is_dark())
            on_click=Callback::new(move |_: MouseEvent| color_mode.toggle())
        >
            {move || preference_label(preference.get())}
        </Button>
    }
}

#[component]
/// Inline pre-paint bootstrap `<script>` for server-rendered or static document heads.
pub fn ColorModeScript(
    /// Names to embed; defaults to [`ColorModeConfig::default`].
    #[prop(optional)]
    config: Option<ColorModeConfig>,
) -> impl IntoView {
    let script = bootstrap_script(&config.unwrap_or_default());
    view! { <script data-ui-kind="color-mode-bootstrap" inner_html=script></script> }
}

#[cfg(test)]
mod tests {
    use platform_host::{MemoryThemeHost, ThemeHost};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn handles_share_updates_through_the_runtime() {
        let _ = leptos::create_runtime();
        let memory = MemoryThemeHost::with_prefers_dark(Some(false));
        let runtime = ColorModeRuntime::new(memory.host());
        let header = bind_color_mode(&runtime);
        let settings = bind_color_mode(&runtime);

        settings.set_preference(ModePreference::Dark);

        assert_eq!(header.mode().get_untracked(), ResolvedMode::Dark);
        assert_eq!(header.preference().get_untracked(), ModePreference::Dark);
        assert_eq!(settings.state().get_untracked(), header.state().get_untracked());
        assert!(memory.document.snapshot().has_class("dark"));
        assert_eq!(memory.color_scheme.listener_count(), 1);
    }

    #[test]
    fn handle_follows_os_while_preference_is_system() {
        let _ = leptos::create_runtime();
        let memory = MemoryThemeHost::with_prefers_dark(Some(true));
        let runtime = ColorModeRuntime::new(memory.host());
        let handle = bind_color_mode(&runtime);
        assert_eq!(handle.mode().get_untracked(), ResolvedMode::Dark);

        memory.color_scheme.set_prefers_dark(false);
        assert_eq!(
            handle.state().get_untracked(),
            PersistedState::system(ResolvedMode::Light)
        );

        handle.toggle();
        assert_eq!(handle.preference().get_untracked(), ModePreference::Light);
    }

    #[test]
    fn only_headless_runtimes_are_flagged() {
        let memory = MemoryThemeHost::default();
        assert_eq!(headless_warning(&ColorModeRuntime::new(memory.host())), None);

        let warning = headless_warning(&ColorModeRuntime::new(ThemeHost::headless()))
            .expect("headless runtime is flagged");
        assert!(warning.contains("headless host"));
    }

    #[test]
    fn labels_cover_every_preference() {
        let labels: Vec<&str> = ModePreference::ALL.into_iter().map(preference_label).collect();
        assert_eq!(labels, vec!["System", "Light", "Dark"]);
    }
}
