//! Preference, resolved mode, and persisted state records.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ColorModeError;

/// The user's stored intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModePreference {
    /// Follow the OS signal.
    #[default]
    System,
    /// Always light.
    Light,
    /// Always dark.
    Dark,
}

impl ModePreference {
    /// Every preference in switcher order.
    pub const ALL: [Self; 3] = [Self::System, Self::Light, Self::Dark];

    /// Returns the stable token for this preference.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Next preference in the System -> Light -> Dark cycle.
    pub const fn next(self) -> Self {
        match self {
            Self::System => Self::Light,
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
        }
    }

    /// The concrete mode this preference pins, `None` for [`ModePreference::System`].
    pub const fn explicit_mode(self) -> Option<ResolvedMode> {
        match self {
            Self::System => None,
            Self::Light => Some(ResolvedMode::Light),
            Self::Dark => Some(ResolvedMode::Dark),
        }
    }
}

impl FromStr for ModePreference {
    type Err = ColorModeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ColorModeError::UnknownToken(raw.to_string())),
        }
    }
}

impl std::fmt::Display for ModePreference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mode actually applied to the document. Never "system".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResolvedMode {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl ResolvedMode {
    /// Maps an OS "prefers dark" flag to a mode.
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        }
    }

    /// Returns the stable token (also the `color-scheme` style value).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns whether this is the dark mode.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl FromStr for ResolvedMode {
    type Err = ColorModeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            _ => Err(ColorModeError::UnknownToken(raw.to_string())),
        }
    }
}

impl std::fmt::Display for ResolvedMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Persisted preference plus the mode it resolved to at write time.
///
/// When `preference` is explicit, `mode` equals it; under [`ModePreference::System`] `mode` is the
/// OS signal observed at write time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PersistedState {
    /// Stored intent.
    pub preference: ModePreference,
    /// Resolved mode.
    pub mode: ResolvedMode,
}

impl PersistedState {
    /// State following the OS signal, currently resolved to `os_mode`.
    pub const fn system(os_mode: ResolvedMode) -> Self {
        Self {
            preference: ModePreference::System,
            mode: os_mode,
        }
    }

    /// Resolves `preference` against the current OS mode.
    pub const fn resolve(preference: ModePreference, os_mode: ResolvedMode) -> Self {
        let mode = match preference.explicit_mode() {
            Some(mode) => mode,
            None => os_mode,
        };
        Self { preference, mode }
    }
}

/// Snapshot delivered to every change subscriber.
pub type ChangeEvent = PersistedState;
