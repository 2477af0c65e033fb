//! User record validation, single and batch.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationError;
use crate::schema::{
    as_object, check_object, require_i64, require_str, Acceptance, FieldSpec, FieldType,
};

/// First names the upstream fixtures treat as valid. Minimal observed
/// contract, not a claim of completeness.
const FIRST_NAMES: &[&str] = &["Anastasia", "Ivan", "User"];

/// Known surnames; stringified non-negative integers are also accepted via
/// the `numeric_strings` extension on the allow-list.
const LAST_NAMES: &[&str] = &["Dorn", "Tsytsartseva"];

const SCHEMA: &[FieldSpec] = &[
    FieldSpec {
        name: "id",
        ty: FieldType::Integer,
        accept: None,
    },
    FieldSpec {
        name: "first_name",
        ty: FieldType::String,
        accept: Some(Acceptance::AllowList {
            literals: FIRST_NAMES,
            numeric_strings: false,
        }),
    },
    FieldSpec {
        name: "last_name",
        ty: FieldType::String,
        accept: Some(Acceptance::AllowList {
            literals: LAST_NAMES,
            numeric_strings: true,
        }),
    },
];

/// A validated user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
}

/// Validate a raw mapping as a [`User`].
///
/// Fields are checked in the order `id`, `first_name`, `last_name` and the
/// first violation wins: a string `id` is a `TypeMismatch`, an unknown name
/// or surname an `InvalidValue`, an absent key a `MissingField`.
pub fn validate_user(fields: &Map<String, Value>) -> Result<User, ValidationError> {
    check_object(SCHEMA, fields)?;
    Ok(User {
        id: require_i64(fields, "id")?,
        first_name: require_str(fields, "first_name")?.to_owned(),
        last_name: require_str(fields, "last_name")?.to_owned(),
    })
}

/// Fail-fast batch validation over an array's elements.
///
/// Preserves input order; an empty slice yields an empty vector. Stops at the
/// first invalid record — no partial output is returned. Elements that are
/// not JSON objects are themselves a `TypeMismatch`.
pub fn validate_users(records: &[Value]) -> Result<Vec<User>, ValidationError> {
    let users = records
        .iter()
        .map(|record| validate_user(as_object(record)?))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = users.len(), "user batch accepted");
    Ok(users)
}

/// Collect-all batch variant: one result per input element, in input order.
pub fn validate_users_collect(records: &[Value]) -> Vec<Result<User, ValidationError>> {
    records
        .iter()
        .map(|record| validate_user(as_object(record)?))
        .collect()
}

// ===========================================================================
// Tests
// ===========================================================================
