//! Error types for canvas rendering

use thiserror::Error;

/// Errors raised while drawing onto a surface
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The underlying surface rejected an operation
    #[error("surface operation '{operation}' failed: {reason}")]
    Surface {
        operation: &'static str,
        reason: String,
    },

    /// No 2D context could be obtained from a canvas element
    #[error("2D context unavailable: {reason}")]
    ContextUnavailable { reason: String },

    /// The renderer was handed an option that failed to load or validate
    #[error("invalid render option: {0}")]
    InvalidOption(#[from] forcegraph_core::Error),
}

impl RenderError {
    /// Creates a surface failure for the named operation
    #[must_use]
    pub fn surface(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::Surface {
            operation,
            reason: reason.into(),
        }
    }

    /// Creates a context acquisition failure
    #[must_use]
    pub fn context_unavailable(reason: impl Into<String>) -> Self {
        Self::ContextUnavailable {
            reason: reason.into(),
        }
    }
}

/// Result type for rendering operations
pub type Result<T> = std::result::Result<T, RenderError>;
