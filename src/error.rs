//! Error types for the sumstats tools
//!
//! Provides structured error handling with context and proper error chains.

use thiserror::Error;

/// Main error type for the sumstats tools
#[derive(Error, Debug)]
pub enum SumstatsError {
    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Errors writing a rendered view to a display sink
    #[error("Render error: failed to write {what}")]
    Render {
        what: String,
        #[source]
        source: std::io::Error,
    },
}

impl SumstatsError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new render error
    pub fn render(what: impl Into<String>, source: std::io::Error) -> Self {
        Self::Render {
            what: what.into(),
            source,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SumstatsError>;
