//! # Error Types
//!
//! Domain-specific error types for quote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quote-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Field addressing failures                      │
//! │                                                                         │
//! │  Desktop host errors (in app)                                          │
//! │  └── ApiError         - What the view sees (serialized)                │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → View                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## What Is NOT an Error
//! Editing is permissive. Two situations look like failures but are defined
//! outcomes instead:
//! - A non-numeric quantity, rate or tax rate becomes `0`
//!   (see [`crate::parse::parse_numeric_field_or_zero`]).
//! - A line-item index that is out of range leaves the state unchanged.
//!
//! The only errors are about *addressing*: the view names a section or field
//! that does not exist, or sends a value of the wrong kind.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field addressing errors.
///
/// These occur when the view addresses state by name and the name or the
/// value kind doesn't line up with the data model.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Section name is not one of the known sub-objects.
    #[error("unknown section '{name}', expected one of: {allowed:?}")]
    UnknownSection {
        name: String,
        allowed: Vec<String>,
    },

    /// Field name is not declared by the section.
    #[error("{section} has no field '{field}'")]
    UnknownField { section: String, field: String },

    /// Line-item column name is not known.
    #[error("unknown line item field '{0}'")]
    UnknownLineItemField(String),

    /// Value kind doesn't match the field's declared kind.
    #[error("{section}.{field} expects a {expected} value")]
    TypeMismatch {
        section: String,
        field: String,
        expected: String,
    },

    /// Value is not in allowed set.
    #[error("{field} must be one of: {allowed:?}")]
    NotAllowed { field: String, allowed: Vec<String> },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for field addressing.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::UnknownField {
            section: "customer".to_string(),
            field: "fax".to_string(),
        };
        assert_eq!(err.to_string(), "customer has no field 'fax'");

        let err = ValidationError::TypeMismatch {
            section: "branding".to_string(),
            field: "company_name_enabled".to_string(),
            expected: "flag".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "branding.company_name_enabled expects a flag value"
        );
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::UnknownLineItemField("price".to_string());
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Validation error: unknown line item field 'price'"
        );
    }
}
