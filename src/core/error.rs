//! Error types and error handling for the jsonsearch engine.
//!
//! This module defines the error types used throughout the
//! library. Presentation of errors (exit codes, colored output)
//! is handled by the CLI adapter.

use thiserror::Error;

/// Result type alias for jsonsearch operations
pub type Result<T> = std::result::Result<T, JsonSearchError>;

/// Main error type for the jsonsearch engine
#[derive(Error, Debug)]
pub enum JsonSearchError {
    #[error("Unknown document: {0}")]
    UnknownDocument(String),

    #[error("Key '{key}' not found in document '{document}'")]
    KeyNotFound { document: String, key: String },

    #[error("No match for {key}={value} in document '{document}'")]
    KeyValueNotFound {
        document: String,
        key: String,
        value: String,
    },

    #[error("Cannot index '{document}.{key}': matched value is {found}")]
    UnsupportedIndexType {
        document: String,
        key: String,
        found: &'static str,
    },

    #[error("Invalid document '{0}': root must be an object or an array")]
    InvalidDocument(String),

    #[error("Malformed relationship: {0}")]
    MalformedRelationship(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl JsonSearchError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a "not found" type error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            JsonSearchError::UnknownDocument(_)
                | JsonSearchError::KeyNotFound { .. }
                | JsonSearchError::KeyValueNotFound { .. }
                | JsonSearchError::InvalidPath(_)
        )
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            JsonSearchError::InvalidDocument(_)
                | JsonSearchError::UnsupportedIndexType { .. }
                | JsonSearchError::MalformedRelationship(_)
                | JsonSearchError::ConfigError(_)
        )
    }

    pub(crate) fn key_value_not_found(document: &str, key: &str, value: &str) -> Self {
        JsonSearchError::KeyValueNotFound {
            document: document.to_string(),
            key: key.to_string(),
            value: value.to_string(),
        }
    }
}
