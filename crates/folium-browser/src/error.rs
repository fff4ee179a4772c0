//! Error types for folium-browser

use thiserror::Error;

/// Result type alias for folium-browser operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folium-browser
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folium-core
    #[error("Core error: {0}")]
    Core(#[from] folium_core::Error),

    /// Transport-level fetch failure (connect, timeout, HTTP status)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The catalog answered, but the body is not a valid project array
    #[error("Decode error: {message}")]
    Decode {
        /// What failed to decode
        message: String,
    },
}

impl Error {
    /// Creates a decode error from any displayable message.
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Returns `true` when retrying the same fetch could plausibly succeed.
    ///
    /// Transport failures are transient; a body that does not decode, or a
    /// record that does not validate, will not improve on retry. The browser
    /// itself never retries; this classification exists for callers that
    /// re-mount.
    pub fn is_transient(&self) -> bool {
        match self {
            Error::Http(_) => true,
            Error::Decode { .. } => false,
            Error::Core(_) => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
