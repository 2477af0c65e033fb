//! Rejection taxonomy for record validation.
//!
//! Every failure path is a variant here; validators never panic on malformed
//! input and never coerce a bad value into a record.

use thiserror::Error;

/// Why a raw mapping was rejected.
///
/// Validation is fail-fast: the error always describes the first field that
/// violated its schema entry, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field was absent from the input mapping.
    #[error("missing required field `{0}`")]
    MissingField(String),

    /// A field was present but carried a value of the wrong JSON type.
    #[error("field `{field}` has the wrong type, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
    },

    /// A string field failed its format predicate.
    #[error("field `{field}` does not match the `{format}` format")]
    InvalidFormat { field: String, format: &'static str },

    /// A field value fell outside its allow-list.
    #[error("field `{field}` has unrecognized value `{value}`")]
    InvalidValue { field: String, value: String },
}

impl ValidationError {
    /// Name of the field the error refers to.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField(field) => field,
            Self::TypeMismatch { field, .. } => field,
            Self::InvalidFormat { field, .. } => field,
            Self::InvalidValue { field, .. } => field,
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
