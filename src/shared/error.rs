//! Shared Error Types
//!
//! Errors raised while validating wire types. The backend maps every variant
//! to `400 Bad Request`.
//!
//! # Usage
//!
//! ```rust
//! use simplenotes::shared::error::SharedError;
//!
//! let error = SharedError::validation("title", "Title cannot be empty");
//! assert_eq!(error.field(), "title");
//! ```
use thiserror::Error;

/// Validation failures on request payloads
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A field failed validation
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }

    /// Message without the field prefix, suitable for API clients
    pub fn detail(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
