//! Pre-paint bootstrap: resolve the stored preference and render it before any UI mounts.
//!
//! The procedure exists twice. [`bootstrap_script`] renders it as a dependency-free inline
//! `<script>` body for the document head, and [`run_bootstrap`] executes the same steps against
//! host ports. Both read names from one [`ColorModeConfig`] and any failure renders light mode.

use platform_host::{HostError, ThemeHost};

use crate::{store::apply_to_root, ColorModeConfig, ModePreference, ResolvedMode};

const SCRIPT_TEMPLATE: &str = r#"(function(){function a(m){var d=document.documentElement;d.classList.toggle(__DARK_CLASS__,m==="dark");d.style.setProperty(__PROPERTY__,m)}function c(n){var p=document.cookie?document.cookie.split(";"):[];for(var i=0;i<p.length;i++){var s=p[i].replace(/^\s+/,""),e=s.indexOf("=");if(e>0&&s.slice(0,e)===n){return decodeURIComponent(s.slice(e+1))}}return null}try{var r=c(__COOKIE__);if(r===null){r=c(__LEGACY__)}var p=r===null?"system":JSON.parse(r).preference,m;if(p==="system"){m=window.matchMedia&&window.matchMedia(__QUERY__).matches?"dark":"light"}else if(p==="light"||p==="dark"){m=p}else{throw new Error("color-mode")}a(m)}catch(_){try{a("light")}catch(_){}}})();"#;

/// Resolves the mode to paint from raw cookie values and the OS signal.
///
/// `legacy` is consulted only when `current` is absent. No stored value means "system"; a value
/// that is not a JSON object with a known `preference` token renders light, as does "system" with
/// no queryable OS signal.
pub fn resolve_bootstrap_mode(
    current: Option<&str>,
    legacy: Option<&str>,
    os_prefers_dark: Option<bool>,
) -> ResolvedMode {
    let Some(preference) = stored_preference(current.or(legacy)) else {
        return ResolvedMode::Light;
    };
    preference
        .explicit_mode()
        .unwrap_or_else(|| ResolvedMode::from_prefers_dark(os_prefers_dark.unwrap_or(false)))
}

fn stored_preference(raw: Option<&str>) -> Option<ModePreference> {
    let Some(raw) = raw else {
        return Some(ModePreference::System);
    };
    let value: serde_json::Value = serde_json::from_str(raw).ok()?;
    value.get("preference")?.as_str()?.parse().ok()
}

/// Executes the bootstrap against `host` and returns the mode it rendered.
///
/// A cookie port error counts as a bootstrap failure and renders light.
pub fn run_bootstrap(host: &ThemeHost, config: &ColorModeConfig) -> ResolvedMode {
    let mode = match read_cookies(host, config) {
        Ok((current, legacy)) => resolve_bootstrap_mode(
            current.as_deref(),
            legacy.as_deref(),
            host.color_scheme.prefers_dark(),
        ),
        Err(err) => {
            log::debug!("color-mode bootstrap falling back to light: {err}");
            ResolvedMode::Light
        }
    };
    apply_to_root(host.document.as_ref(), config, mode);
    mode
}

fn read_cookies(
    host: &ThemeHost,
    config: &ColorModeConfig,
) -> Result<(Option<String>, Option<String>), HostError> {
    let current = host.cookies.get(&config.cookie_name)?;
    let legacy = match current {
        Some(_) => None,
        None => host.cookies.get(&config.legacy_cookie_name)?,
    };
    Ok((current, legacy))
}

/// Renders the inline bootstrap script body for `config`.
///
/// Config values are embedded as JSON string literals with `<` escaped, so the result is safe
/// inside a `<script>` element.
pub fn bootstrap_script(config: &ColorModeConfig) -> String {
    SCRIPT_TEMPLATE
        .replace("__DARK_CLASS__", &js_string(&config.dark_class))
        .replace("__PROPERTY__", &js_string(&config.color_scheme_property))
        .replace("__COOKIE__", &js_string(&config.cookie_name))
        .replace("__LEGACY__", &js_string(&config.legacy_cookie_name))
        .replace("__QUERY__", &js_string(&config.dark_media_query))
}

fn js_string(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace('<', "\\u003c")
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use boa_engine::{Context, Source};
    use platform_host::{CookieAttributes, CookieStore, MemoryThemeHost};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{PersistedModeStore, PersistedState};

    const OS_SIGNALS: [Option<bool>; 3] = [Some(true), Some(false), None];

    #[test]
    fn bootstrap_and_runtime_render_identically() {
        for preference in ModePreference::ALL {
            for os in OS_SIGNALS {
                let runtime_host = MemoryThemeHost::with_prefers_dark(os);
                let store = PersistedModeStore::new(
                    runtime_host.host(),
                    Rc::new(ColorModeConfig::default()),
                );
                let state = store.resolve(preference);
                store.commit(&state);

                let boot_host = MemoryThemeHost::with_prefers_dark(os);
                let raw = runtime_host
                    .cookies
                    .entry("color-mode")
                    .expect("persisted")
                    .value;
                boot_host.cookies.seed("color-mode", raw);
                let mode = run_bootstrap(&boot_host.host(), &ColorModeConfig::default());

                assert_eq!(mode, state.mode, "{preference:?} / {os:?}");
                assert_eq!(
                    boot_host.document.snapshot(),
                    runtime_host.document.snapshot(),
                    "{preference:?} / {os:?}"
                );
            }
        }
    }

    #[test]
    fn failures_render_light_even_when_os_is_dark() {
        let dark = Some(true);
        assert_eq!(resolve_bootstrap_mode(Some("{not json"), None, dark), ResolvedMode::Light);
        assert_eq!(resolve_bootstrap_mode(Some("null"), None, dark), ResolvedMode::Light);
        assert_eq!(
            resolve_bootstrap_mode(Some(r#"{"preference":"sepia"}"#), None, dark),
            ResolvedMode::Light
        );
        assert_eq!(
            resolve_bootstrap_mode(Some(r#"{"preference":"Dark"}"#), None, dark),
            ResolvedMode::Light
        );
    }

    #[test]
    fn absent_cookies_follow_os_and_legacy_is_a_fallback() {
        assert_eq!(resolve_bootstrap_mode(None, None, Some(true)), ResolvedMode::Dark);
        assert_eq!(resolve_bootstrap_mode(None, None, None), ResolvedMode::Light);

        let legacy = r#"{"preference":"dark","mode":"dark"}"#;
        assert_eq!(resolve_bootstrap_mode(None, Some(legacy), Some(false)), ResolvedMode::Dark);
        assert_eq!(
            resolve_bootstrap_mode(
                Some(r#"{"preference":"light","mode":"light"}"#),
                Some(legacy),
                Some(false)
            ),
            ResolvedMode::Light
        );
    }

    #[test]
    fn run_bootstrap_reads_legacy_cookie() {
        let memory = MemoryThemeHost::with_prefers_dark(Some(false));
        memory
            .cookies
            .seed("theme", r#"{"preference":"dark","mode":"dark"}"#);

        let mode = run_bootstrap(&memory.host(), &ColorModeConfig::default());

        assert_eq!(mode, ResolvedMode::Dark);
        assert!(memory.document.snapshot().has_class("dark"));
        assert!(memory.cookies.writes().is_empty());
    }

    #[test]
    fn unreadable_cookies_render_light() {
        struct RejectingCookies;

        impl CookieStore for RejectingCookies {
            fn get(&self, _name: &str) -> Result<Option<String>, HostError> {
                Err(HostError::rejected("cookies", "blocked"))
            }

            fn set(
                &self,
                _name: &str,
                _value: &str,
                _attributes: &CookieAttributes,
            ) -> Result<(), HostError> {
                Err(HostError::rejected("cookies", "blocked"))
            }
        }

        let memory = MemoryThemeHost::with_prefers_dark(Some(true));
        let host = ThemeHost {
            cookies: Rc::new(RejectingCookies),
            ..memory.host()
        };

        assert_eq!(run_bootstrap(&host, &ColorModeConfig::default()), ResolvedMode::Light);
        assert_eq!(
            memory.document.snapshot().style_property("color-scheme"),
            Some("light")
        );
    }

    #[test]
    fn run_bootstrap_survives_headless_host() {
        assert_eq!(
            run_bootstrap(&ThemeHost::headless(), &ColorModeConfig::default()),
            ResolvedMode::Light
        );
    }

    #[test]
    fn script_embeds_configured_names() {
        let script = bootstrap_script(&ColorModeConfig::default());
        assert!(script.contains(r#"c("color-mode")"#));
        assert!(script.contains(r#"c("theme")"#));
        assert!(script.contains(r#"matchMedia("(prefers-color-scheme: dark)")"#));
        assert!(script.contains(r#"classList.toggle("dark","#));
        assert!(script.contains(r#"setProperty("color-scheme",m)"#));
        assert!(script.contains(r#"a("light")"#));
        assert!(!script.contains("__"));
    }

    #[test]
    fn script_escapes_markup_in_config() {
        let config = ColorModeConfig {
            cookie_name: "</script><b>".to_string(),
            ..ColorModeConfig::default()
        };
        let script = bootstrap_script(&config);
        assert!(!script.contains("</script>"));
        assert!(script.contains(r#"c("\u003c/script>\u003cb>")"#));
    }

    #[test]
    fn persisted_state_tokens_match_bootstrap_tokens() {
        for preference in ModePreference::ALL {
            let raw = serde_json::to_string(&PersistedState::resolve(
                preference,
                ResolvedMode::Dark,
            ))
            .expect("serialize");
            assert_eq!(
                stored_preference(Some(&raw)),
                Some(preference),
                "{raw}"
            );
        }
    }

    const PAGE_STUB: &str = r#"var classes={},style={};var document={cookie:__COOKIE_HEADER__,documentElement:{classList:{toggle:function(n,f){classes[n]=f===true}},style:{setProperty:function(p,v){style[p]=v}}}};var window={matchMedia:__MATCH_MEDIA__};"#;

    const RENDERED_ROOT: &str = r#"JSON.stringify({dark:classes["dark"]===true,scheme:style["color-scheme"]===undefined?null:style["color-scheme"]})"#;

    #[derive(Debug, PartialEq, serde::Deserialize)]
    struct RenderedRoot {
        dark: bool,
        scheme: Option<String>,
    }

    impl RenderedRoot {
        fn of(memory: &MemoryThemeHost) -> Self {
            let snapshot = memory.document.snapshot();
            Self {
                dark: snapshot.has_class("dark"),
                scheme: snapshot.style_property("color-scheme").map(str::to_string),
            }
        }

        fn painted(mode: ResolvedMode) -> Self {
            Self {
                dark: mode.is_dark(),
                scheme: Some(mode.as_str().to_string()),
            }
        }
    }

    fn render_with_script(cookie_header: &str, os_prefers_dark: Option<bool>) -> RenderedRoot {
        let match_media = match os_prefers_dark {
            Some(dark) => format!(
                r#"function(q){{return{{matches:q==="(prefers-color-scheme: dark)"&&{dark}}}}}"#
            ),
            None => "undefined".to_string(),
        };
        let stub = PAGE_STUB
            .replace(
                "__COOKIE_HEADER__",
                &serde_json::Value::from(cookie_header).to_string(),
            )
            .replace("__MATCH_MEDIA__", &match_media);
        let script = bootstrap_script(&ColorModeConfig::default());

        let mut context = Context::default();
        context.eval(Source::from_bytes(&stub)).expect("page stub");
        context.eval(Source::from_bytes(&script)).expect("bootstrap script");
        let rendered = context
            .eval(Source::from_bytes(RENDERED_ROOT))
            .expect("rendered root");
        let json = rendered
            .to_string(&mut context)
            .expect("rendered root string")
            .to_std_string_escaped();
        serde_json::from_str(&json).expect("rendered root json")
    }

    #[test]
    fn inline_script_and_runtime_render_identically() {
        for preference in ModePreference::ALL {
            for os in OS_SIGNALS {
                let memory = MemoryThemeHost::with_prefers_dark(os);
                let store =
                    PersistedModeStore::new(memory.host(), Rc::new(ColorModeConfig::default()));
                let state = store.resolve(preference);
                store.commit(&state);
                let raw = memory
                    .cookies
                    .entry("color-mode")
                    .expect("persisted")
                    .value;

                let rendered = render_with_script(&format!("session=1; color-mode={raw}"), os);

                assert_eq!(rendered, RenderedRoot::of(&memory), "{preference:?} / {os:?}");
            }
        }
    }

    #[test]
    fn inline_script_renders_light_on_bad_values() {
        for raw in [
            "{not json",
            "null",
            r#"{"preference":"sepia"}"#,
            r#"{"preference":"Dark"}"#,
        ] {
            let rendered = render_with_script(&format!("color-mode={raw}"), Some(true));
            assert_eq!(rendered, RenderedRoot::painted(ResolvedMode::Light), "{raw}");
            assert_eq!(
                resolve_bootstrap_mode(Some(raw), None, Some(true)),
                ResolvedMode::Light
            );
        }
    }

    #[test]
    fn inline_script_agrees_on_legacy_and_absent_cookies() {
        let dark = r#"{"preference":"dark","mode":"dark"}"#;
        let light = r#"{"preference":"light","mode":"light"}"#;
        let cases = [
            (format!("theme={dark}"), None, Some(dark), Some(false)),
            (format!("color-mode={light}; theme={dark}"), Some(light), Some(dark), Some(false)),
            (String::new(), None, None, Some(true)),
            (String::new(), None, None, None),
        ];

        for (header, current, legacy, os) in cases {
            let expected = resolve_bootstrap_mode(current, legacy, os);
            assert_eq!(
                render_with_script(&header, os),
                RenderedRoot::painted(expected),
                "{header:?} / {os:?}"
            );
        }
    }

    #[test]
    fn inline_script_swallows_missing_document() {
        let script = bootstrap_script(&ColorModeConfig::default());
        let mut context = Context::default();
        assert!(context.eval(Source::from_bytes(&script)).is_ok());
    }
}
