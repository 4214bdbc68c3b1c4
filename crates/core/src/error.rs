//! Core Error Types
//!
//! Defines the foundational error types used across the Prompt Feed workspace.
//! Kept dependency-free (only thiserror + std) so the domain crate stays
//! lightweight.
//!
//! The application crate wraps these in its own `AppError` together with
//! provider and configuration failures.

use thiserror::Error;

/// Core error type for the Prompt Feed workspace.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors (e.g. an inverted date range)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Parse errors for facet values (category, platform, country, dates)
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Result type alias for core errors
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

/// Convert CoreError to a string
impl From<CoreError> for String {
    fn from(err: CoreError) -> String {
        err.to_string()
    }
}
