//! Error types for folium-cli

use thiserror::Error;

/// Result type alias for folium-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folium-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folium-core
    #[error("Core error: {0}")]
    Core(#[from] folium_core::Error),

    /// Error from the catalog service
    #[error("Catalog error: {0}")]
    Catalog(#[from] folium_catalog::Error),

    /// Error from the project browser
    #[error("Browser error: {0}")]
    Browser(#[from] folium_browser::Error),

    /// Filesystem error while managing config files
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The command cannot do what was asked
    #[error("{0}")]
    Usage(String),
}

impl Error {
    /// Creates a usage error from a message.
    pub fn usage<S: Into<String>>(message: S) -> Self {
        Self::Usage(message.into())
    }
}
