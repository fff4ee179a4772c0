//! Error types for folium-catalog

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for folium-catalog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folium-catalog
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from folium-core (record validation, duplicate ids)
    #[error("Core error: {0}")]
    Core(#[from] folium_core::Error),

    /// Configuration error (missing file, bad value, invalid override)
    #[error("Config error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// Filesystem error while reading configuration or project data
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A projects file exists but does not parse as a project array
    #[error("Malformed projects file {}: {message}", path.display())]
    Malformed {
        /// Path of the offending file
        path: PathBuf,
        /// Parse failure detail
        message: String,
    },
}

impl Error {
    /// Creates a configuration error from any displayable message.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a malformed-projects-file error.
    pub fn malformed<P: Into<PathBuf>, S: Into<String>>(path: P, message: S) -> Self {
        Self::Malformed {
            path: path.into(),
            message: message.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
