//! Runtime bundle of store, bus, and controller, plus the process default instance.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use platform_host::ThemeHost;

use crate::{
    bootstrap, ChangeBus, ColorModeConfig, ModeBinding, ModeController, ModePreference,
    PersistedModeStore, PersistedState, ResolvedMode,
};

/// Everything one page needs for color-mode synchronization.
///
/// Every runtime created on a thread joins that thread's page channel: one subscriber list and
/// one OS listener guard. Bindings from different runtimes, such as a provided one and the
/// process default, therefore see the same broadcasts, and the OS listener is attached once.
#[derive(Debug, Clone)]
pub struct ColorModeRuntime {
    store: PersistedModeStore,
    bus: ChangeBus,
    controller: ModeController,
}

impl ColorModeRuntime {
    /// Runtime over `host` with the default configuration.
    pub fn new(host: ThemeHost) -> Self {
        Self::with_config(host, ColorModeConfig::default())
    }

    /// Runtime over `host` with an explicit configuration.
    pub fn with_config(host: ThemeHost, config: ColorModeConfig) -> Self {
        let channel = page_channel();
        let bus = channel
            .bus
            .with_mirror(host.events.clone(), config.change_event.clone());
        let store = PersistedModeStore::new(host, Rc::new(config));
        let controller =
            ModeController::with_guard(store.clone(), bus.clone(), channel.listener_claimed);
        Self {
            store,
            bus,
            controller,
        }
    }

    /// Persistence and document access.
    pub fn store(&self) -> &PersistedModeStore {
        &self.store
    }

    /// Change broadcast.
    pub fn bus(&self) -> &ChangeBus {
        &self.bus
    }

    /// OS listener owner.
    pub fn controller(&self) -> &ModeController {
        &self.controller
    }

    /// Active configuration.
    pub fn config(&self) -> &ColorModeConfig {
        self.store.config()
    }

    /// Creates an inactive per-instance binding.
    pub fn binding(&self) -> ModeBinding {
        ModeBinding::new(self)
    }

    /// Persists, applies, and broadcasts `preference`, returning the state that was broadcast.
    pub fn set_preference(&self, preference: ModePreference) -> PersistedState {
        let state = self.store.resolve(preference);
        self.store.commit(&state);
        self.bus.broadcast(&state);
        state
    }

    /// Runs the pre-paint bootstrap procedure against this runtime's host.
    pub fn bootstrap(&self) -> ResolvedMode {
        bootstrap::run_bootstrap(self.store.host(), self.config())
    }
}

/// Subscriber list and OS listener guard shared by every runtime on the thread.
#[derive(Clone, Default)]
struct PageChannel {
    bus: ChangeBus,
    listener_claimed: Rc<Cell<bool>>,
}

thread_local! {
    static GLOBAL_RUNTIME: RefCell<Option<ColorModeRuntime>> = const { RefCell::new(None) };
    static PAGE_CHANNEL: PageChannel = PageChannel::default();
}

fn page_channel() -> PageChannel {
    PAGE_CHANNEL.with(PageChannel::clone)
}

/// Installs `runtime` as the process default, returning the previously installed one.
pub fn install_runtime(runtime: ColorModeRuntime) -> Option<ColorModeRuntime> {
    log::debug!(
        "installing color-mode runtime on {} host",
        runtime.store.host().strategy.as_str()
    );
    GLOBAL_RUNTIME.with(|slot| slot.borrow_mut().replace(runtime))
}

/// Returns the process default runtime, installing a headless one on first use.
pub fn color_mode_runtime() -> ColorModeRuntime {
    GLOBAL_RUNTIME.with(|slot| {
        slot.borrow_mut()
            .get_or_insert_with(|| ColorModeRuntime::new(ThemeHost::headless()))
            .clone()
    })
}

#[cfg(test)]
mod tests {
    use platform_host::{HostStrategy, MemoryThemeHost};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn set_preference_writes_applies_and_mirrors() {
        let memory = MemoryThemeHost::with_prefers_dark(Some(true));
        let runtime = ColorModeRuntime::new(memory.host());

        let state = runtime.set_preference(ModePreference::System);

        assert_eq!(state, PersistedState::system(ResolvedMode::Dark));
        assert_eq!(runtime.store().read(), Some(state));
        assert!(memory.document.snapshot().has_class("dark"));
        let events = memory.events.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "color-mode-change");
    }

    #[test]
    fn runtimes_on_one_page_share_listener_and_broadcasts() {
        let memory = MemoryThemeHost::with_prefers_dark(Some(false));
        let provided = ColorModeRuntime::new(memory.host());
        let fallback = ColorModeRuntime::new(memory.host());
        let header = provided.binding();
        let settings = fallback.binding();
        header.activate();
        settings.activate();

        header.set_preference(ModePreference::Dark);

        assert_eq!(memory.color_scheme.listener_count(), 1);
        assert_eq!(settings.mode(), ResolvedMode::Dark);
        assert_eq!(
            fallback.store().read(),
            Some(PersistedState::resolve(ModePreference::Dark, ResolvedMode::Light))
        );
        assert_eq!(memory.events.events().len(), 1);

        settings.set_preference(ModePreference::System);
        memory.color_scheme.set_prefers_dark(true);
        assert_eq!(header.state(), PersistedState::system(ResolvedMode::Dark));
        assert_eq!(settings.state(), PersistedState::system(ResolvedMode::Dark));
        assert_eq!(memory.color_scheme.listener_count(), 1);
    }

    #[test]
    fn installing_a_second_runtime_keeps_one_listener() {
        let memory = MemoryThemeHost::with_prefers_dark(Some(true));
        install_runtime(ColorModeRuntime::new(memory.host()));
        color_mode_runtime().binding().activate();

        install_runtime(ColorModeRuntime::new(memory.host()));
        let binding = color_mode_runtime().binding();
        binding.activate();

        assert!(color_mode_runtime().controller().is_registered());
        assert_eq!(memory.color_scheme.listener_count(), 1);
    }

    #[test]
    fn default_runtime_is_headless_until_installed() {
        assert_eq!(
            color_mode_runtime().store().host().strategy,
            HostStrategy::Headless
        );

        let memory = MemoryThemeHost::default();
        let previous = install_runtime(ColorModeRuntime::new(memory.host()));
        assert!(previous.is_some());
        assert_eq!(
            color_mode_runtime().store().host().strategy,
            HostStrategy::Memory
        );
    }
}
