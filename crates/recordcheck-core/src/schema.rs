//! Declarative field schemas and the generic routine that interprets them.
//!
//! Each record shape declares a fixed table of [`FieldSpec`] entries — field
//! name, expected JSON type, optional acceptance rule. One interpreter,
//! [`check_object`], walks the table in declaration order over a raw
//! `serde_json` mapping and reports the first violation. Record constructors
//! run the table first and only then pull the (now known-good) values out.

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationError;

/// JSON type a field's value must carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// A JSON number with no fractional part. A numeric *string* is not an
    /// integer and is rejected, never coerced.
    Integer,
    String,
}

impl FieldType {
    fn name(self) -> &'static str {
        match self {
            Self::Integer => "integer",
            Self::String => "string",
        }
    }

    fn matches(self, value: &Value) -> bool {
        match self {
            Self::Integer => value.as_i64().is_some(),
            Self::String => value.is_string(),
        }
    }
}

/// Acceptance rule applied to a string field after its type check passes.
#[derive(Debug, Clone, Copy)]
pub enum Acceptance {
    /// Value must be one of `literals`, or — when `numeric_strings` is set —
    /// a stringified non-negative integer. Membership is case-sensitive.
    AllowList {
        literals: &'static [&'static str],
        numeric_strings: bool,
    },
    /// Value must satisfy a named format predicate.
    Format {
        name: &'static str,
        predicate: fn(&str) -> bool,
    },
}

impl Acceptance {
    fn accepts(&self, value: &str) -> bool {
        match self {
            Self::AllowList {
                literals,
                numeric_strings,
            } => {
                literals.contains(&value)
                    || (*numeric_strings
                        && !value.is_empty()
                        && value.bytes().all(|b| b.is_ascii_digit()))
            }
            Self::Format { predicate, .. } => predicate(value),
        }
    }
}

/// One row of a record shape's schema table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub ty: FieldType,
    pub accept: Option<Acceptance>,
}

/// Check `fields` against `schema`, failing on the first violation.
///
/// Total over any mapping: unexpected extra keys are ignored, wrong-typed
/// values produce [`ValidationError::TypeMismatch`] rather than a panic.
pub fn check_object(
    schema: &[FieldSpec],
    fields: &Map<String, Value>,
) -> Result<(), ValidationError> {
    for spec in schema {
        let value = fields
            .get(spec.name)
            .ok_or_else(|| ValidationError::MissingField(spec.name.to_owned()))?;

        if !spec.ty.matches(value) {
            debug!(field = spec.name, expected = spec.ty.name(), "type mismatch");
            return Err(ValidationError::TypeMismatch {
                field: spec.name.to_owned(),
                expected: spec.ty.name(),
            });
        }

        if let Some(accept) = &spec.accept {
            // Contract: acceptance rules only pair with string fields. The
            // type check above has already passed, so tripping this means
            // the schema table itself is wrong.
            debug_assert!(
                spec.ty == FieldType::String,
                "acceptance rules require FieldType::String (field `{}`)",
                spec.name
            );
            let text = value.as_str().unwrap_or_default();
            if !accept.accepts(text) {
                debug!(field = spec.name, value = text, "value rejected");
                return Err(match accept {
                    Acceptance::AllowList { .. } => ValidationError::InvalidValue {
                        field: spec.name.to_owned(),
                        value: text.to_owned(),
                    },
                    Acceptance::Format { name, .. } => ValidationError::InvalidFormat {
                        field: spec.name.to_owned(),
                        format: name,
                    },
                });
            }
        }
    }
    Ok(())
}

/// Pull a field's integer value, reporting the same errors the schema check
/// would. Record constructors extract through these helpers so a drifted
/// schema table surfaces as a typed error instead of a default value.
pub fn require_i64(fields: &Map<String, Value>, name: &str) -> Result<i64, ValidationError> {
    fields
        .get(name)
        .ok_or_else(|| ValidationError::MissingField(name.to_owned()))?
        .as_i64()
        .ok_or_else(|| ValidationError::TypeMismatch {
            field: name.to_owned(),
            expected: FieldType::Integer.name(),
        })
}

/// String counterpart of [`require_i64`].
pub fn require_str<'a>(
    fields: &'a Map<String, Value>,
    name: &str,
) -> Result<&'a str, ValidationError> {
    fields
        .get(name)
        .ok_or_else(|| ValidationError::MissingField(name.to_owned()))?
        .as_str()
        .ok_or_else(|| ValidationError::TypeMismatch {
            field: name.to_owned(),
            expected: FieldType::String.name(),
        })
}

/// Require `value` to be a JSON object and hand back its mapping.
///
/// Batch validators call this per element so that a stray scalar in an input
/// array surfaces as a typed error instead of a panic.
pub fn as_object(value: &Value) -> Result<&Map<String, Value>, ValidationError> {
    value.as_object().ok_or(ValidationError::TypeMismatch {
        field: "$".to_owned(),
        expected: "object",
    })
}

// ===========================================================================
// Tests
// ===========================================================================
