//! Core error types for forcegraph configuration and models.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.

use thiserror::Error;

/// Core error type for forcegraph operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Configuration errors
    #[error("invalid option '{field}': {reason}")]
    InvalidOption { field: &'static str, reason: String },

    #[error("invalid label style '{field}': {reason}")]
    InvalidLabelStyle { field: &'static str, reason: String },

    #[error("invalid node '{id}': {reason}")]
    InvalidNode { id: String, reason: String },

    // Parsing errors
    #[error("JSON parse error: {reason}")]
    JsonParseFailed { reason: String },
}

impl Error {
    /// Create an invalid option error.
    pub fn invalid_option(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidOption {
            field,
            reason: reason.into(),
        }
    }

    /// Create an invalid label style error.
    pub fn invalid_label_style(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidLabelStyle {
            field,
            reason: reason.into(),
        }
    }

    /// Create an invalid node error.
    pub fn invalid_node(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidNode {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::json_parse_failed(err.to_string())
    }
}

/// The standard Result type for forcegraph-core operations.
pub type Result<T> = std::result::Result<T, Error>;
