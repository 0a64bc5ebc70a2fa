//! Color-mode failures. Public store, controller, and binding operations absorb these after
//! logging; they surface only from parsing helpers.

use platform_host::HostError;
use thiserror::Error;

/// Error raised while decoding persisted state or talking to a host port.
#[derive(Debug, Error)]
pub enum ColorModeError {
    /// A stored value exists but is not a valid persisted state record.
    #[error("malformed color-mode state under `{key}`: {source}")]
    MalformedState {
        /// Cookie name the value was read from.
        key: String,
        /// Underlying JSON failure.
        #[source]
        source: serde_json::Error,
    },
    /// A host port failed.
    #[error(transparent)]
    Host(#[from] HostError),
    /// A preference or mode token was not recognized.
    #[error("unknown color-mode token `{0}`")]
    UnknownToken(String),
}
