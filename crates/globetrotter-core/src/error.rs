//! Error types for the Globetrotter core library.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for all trip store, itinerary and generation operations.
///
/// Corrupt stored trip data has no variant: the trip store recovers
/// from it locally and never reports it to callers.
#[derive(Error, Debug)]
pub enum TravelError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG base directory lookup errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
    /// The generation collaborator failed or returned an unusable plan
    #[error("Itinerary generation failed: {reason}")]
    GenerationFailed { reason: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> TravelError {
        TravelError::Database {
            message: self.message,
            source,
        }
    }
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> TravelError {
        TravelError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl TravelError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a generation failure from anything displayable.
    pub fn generation_failed(reason: impl std::fmt::Display) -> Self {
        Self::GenerationFailed {
            reason: reason.to_string(),
        }
    }

    /// Whether this error is the single generation-failed condition.
    pub fn is_generation_failure(&self) -> bool {
        matches!(self, Self::GenerationFailed { .. })
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| TravelError::database(message).with_source(e))
    }
}

/// Result type alias for Globetrotter operations
pub type Result<T> = std::result::Result<T, TravelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_builder() {
        let err = TravelError::invalid_input("guests").with_reason("must be at least 1");
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'guests': must be at least 1"
        );
    }

    #[test]
    fn test_generation_failure_is_single_condition() {
        let err = TravelError::generation_failed("model returned prose");
        assert!(err.is_generation_failure());
        assert!(err.to_string().contains("model returned prose"));

        let other = TravelError::Configuration {
            message: "missing key".to_string(),
        };
        assert!(!other.is_generation_failure());
    }

    #[test]
    fn test_db_context_wraps_source() {
        let result: std::result::Result<(), rusqlite::Error> =
            Err(rusqlite::Error::QueryReturnedNoRows);
        let err = result.db_context("Failed to read value").unwrap_err();
        assert!(matches!(err, TravelError::Database { .. }));
        assert!(err.to_string().contains("Failed to read value"));
    }
}
