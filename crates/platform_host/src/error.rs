//! Typed failures reported by host service ports.

use thiserror::Error;

/// Failure reported by a host port before or while a host operation executes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// The host does not expose the requested capability (non-browser target, missing API).
    #[error("capability unavailable: {capability}")]
    Unavailable {
        /// Stable capability identifier used in diagnostics.
        capability: &'static str,
    },
    /// The host exposes the capability but rejected the operation.
    #[error("{capability} rejected operation: {message}")]
    Rejected {
        /// Stable capability identifier used in diagnostics.
        capability: &'static str,
        /// Host-provided failure detail.
        message: String,
    },
}

impl HostError {
    /// Builds an [`HostError::Unavailable`] for `capability`.
    pub const fn unavailable(capability: &'static str) -> Self {
        Self::Unavailable { capability }
    }

    /// Builds an [`HostError::Rejected`] for `capability` with a diagnostic message.
    pub fn rejected(capability: &'static str, message: impl Into<String>) -> Self {
        Self::Rejected {
            capability,
            message: message.into(),
        }
    }

    /// Returns a stable capability label for diagnostics.
    pub const fn capability(&self) -> &'static str {
        match self {
            Self::Unavailable { capability } | Self::Rejected { capability, .. } => capability,
        }
    }
}
