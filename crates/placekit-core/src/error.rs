//! Core error types for placekit.
//!
//! This module provides the [`PlacekitError`] enum covering endpoint
//! resolution errors, configuration errors, transport errors, and
//! serialization errors, plus the [`PlacekitResult`] alias used throughout
//! the workspace.

use thiserror::Error;

/// The primary error type for placekit.
///
/// The most domain-specific variant is [`PlacekitError::UnsavedPlace`]: a
/// submission endpoint cannot be computed until its owning place has been
/// saved and assigned an id by the server. That is a programmer-facing
/// precondition violation and is surfaced synchronously to the caller.
#[derive(Error, Debug)]
pub enum PlacekitError {
    /// A submission endpoint was requested for a place with no id.
    #[error(
        "place id is not defined; the place must be saved before saving its {submission_type}"
    )]
    UnsavedPlace {
        /// The submission type whose endpoint was being resolved.
        submission_type: String,
    },

    /// A place already has an id and cannot be assigned another one.
    #[error("place already has id {existing}; ids are assigned exactly once")]
    AlreadySaved {
        /// The id the place already carries.
        existing: u64,
    },

    /// A configuration value is missing or invalid.
    #[error("configuration error: {0}")]
    ConfigurationError(String),

    /// An error occurred during serialization or deserialization.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// A header name or value could not be constructed.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The underlying transport failed to carry the request.
    #[error("transport error: {0}")]
    Transport(String),

    /// A named entity was not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// An I/O error occurred.
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, PlacekitError>`.
pub type PlacekitResult<T> = Result<T, PlacekitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_place_message_names_precondition() {
        let err = PlacekitError::UnsavedPlace {
            submission_type: "responses".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("must be saved"));
        assert!(msg.contains("responses"));
    }

    #[test]
    fn test_already_saved_message() {
        let err = PlacekitError::AlreadySaved { existing: 42 };
        assert!(err.to_string().contains("42"));
    }

    #[test]
    fn test_configuration_error_display() {
        let err = PlacekitError::ConfigurationError("bad api_root".into());
        assert_eq!(err.to_string(), "configuration error: bad api_root");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PlacekitError = io_err.into();
        assert!(err.to_string().contains("file missing"));
    }
}
