//! Error types for the Folium core library.

use thiserror::Error;

use crate::project::ProjectId;

/// Result type alias for folium-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing or validating portfolio data.
///
/// The collection is immutable after construction, so every variant here is
/// a construction-time problem; nothing in this enum can occur while the
/// catalog is being served.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A record failed validation.
    #[error("Validation error: {message}")]
    Validation {
        /// Field that failed validation, if one can be named.
        field: Option<String>,
        /// What went wrong.
        message: String,
    },

    /// Two records in the same collection carry the same id.
    #[error("Duplicate project id: {id}")]
    DuplicateId {
        /// The id that appeared more than once.
        id: ProjectId,
    },

    /// A string did not name one of the recognized tab categories.
    #[error("Unknown tab category: {name:?}")]
    UnknownTab {
        /// The unrecognized input.
        name: String,
    },
}

impl Error {
    /// Creates a validation error without a field name.
    pub fn validation<M: Into<String>>(message: M) -> Self {
        Error::Validation {
            field: None,
            message: message.into(),
        }
    }

    /// Creates a validation error naming the offending field.
    pub fn validation_field<F, M>(field: F, message: M) -> Self
    where
        F: Into<String>,
        M: Into<String>,
    {
        Error::Validation {
            field: Some(field.into()),
            message: message.into(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
