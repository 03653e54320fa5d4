//! # API Error Type
//!
//! Unified error type for host commands, plus the startup error returned by
//! [`crate::run`].
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Quote Desk                             │
//! │                                                                         │
//! │  View                        Host                                       │
//! │  ────                        ────                                       │
//! │                                                                         │
//! │  update_field('customer', 'shoe_size', '42')                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Bad name? ─── ValidationError::UnknownField ─── ApiError ─────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Session is left untouched when a command fails.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bad numeric input is NOT an error anywhere: it becomes 0 in the store.

use quote_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

/// API error returned from host commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "UNKNOWN_FIELD",
///   "message": "customer has no field 'shoe_size'"
/// }
/// ```
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Section name not recognized
    UnknownSection,

    /// Field or line-item column not recognized
    UnknownField,

    /// Text sent to a flag field or the reverse
    TypeMismatch,

    /// Any other input validation failure
    ValidationError,

    /// Request line is not a known command
    InvalidCommand,

    /// Document could not be serialized
    Serialization,

    /// Internal error
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        tracing::warn!("rejected command input: {}", err);

        let code = match &err {
            ValidationError::UnknownSection { .. } => ErrorCode::UnknownSection,
            ValidationError::UnknownField { .. } | ValidationError::UnknownLineItemField(_) => {
                ErrorCode::UnknownField
            }
            ValidationError::TypeMismatch { .. } => ErrorCode::TypeMismatch,
            ValidationError::NotAllowed { .. } => ErrorCode::ValidationError,
        };
        ApiError::new(code, err.to_string())
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Validation(e) => ApiError::from(e),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        tracing::error!("document serialization failed: {}", err);
        ApiError::new(ErrorCode::Serialization, "Document could not be serialized")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Startup Error
// =============================================================================

/// Failures that stop the host before or while printing.
#[derive(Debug, Error)]
pub enum DeskError {
    /// The configured starting state was rejected by the store.
    #[error("invalid starting quote: {0}")]
    Core(#[from] CoreError),

    /// A command failed.
    #[error("{0}")]
    Api(#[from] ApiError),

    /// Writing output failed.
    #[error("output failed: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_codes() {
        let err: ApiError = ValidationError::UnknownLineItemField("price".into()).into();
        assert_eq!(err.code, ErrorCode::UnknownField);
        assert_eq!(err.message, "unknown line item field 'price'");

        let err: ApiError = CoreError::from(ValidationError::TypeMismatch {
            section: "branding".into(),
            field: "logo".into(),
            expected: "text".into(),
        })
        .into();
        assert_eq!(err.code, ErrorCode::TypeMismatch);
    }

    #[test]
    fn test_serialized_shape() {
        let err = ApiError::new(ErrorCode::UnknownSection, "unknown section 'items'");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "UNKNOWN_SECTION");
        assert_eq!(json["message"], "unknown section 'items'");

        let json = serde_json::to_value(ErrorCode::InvalidCommand).unwrap();
        assert_eq!(json, "INVALID_COMMAND");
    }

    #[test]
    fn test_display() {
        let err = ApiError::internal("boom");
        assert_eq!(err.to_string(), "[Internal] boom");

        let err = DeskError::from(ApiError::validation("bad"));
        assert_eq!(err.to_string(), "[ValidationError] bad");
    }
}
