//! Access-token request validation.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::ValidationError;
use crate::schema::{check_object, require_str, Acceptance, FieldSpec, FieldType};

/// Placeholder format rule: issued tokens are an alphanumeric stem carrying a
/// `_token` suffix. The upstream contract only pins down two literals
/// (`test_token` accepted, `invalid_token_format` rejected); swap the pattern
/// here if the real issuer format becomes known.
static TOKEN_FORMAT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+_token$").expect("token pattern is valid"));

fn is_token(value: &str) -> bool {
    TOKEN_FORMAT.is_match(value)
}

const SCHEMA: &[FieldSpec] = &[FieldSpec {
    name: "access_token",
    ty: FieldType::String,
    accept: Some(Acceptance::Format {
        name: "access-token",
        predicate: is_token,
    }),
}];

/// A validated access-token request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenRequest {
    pub access_token: String,
}

/// Validate a raw mapping as an [`AccessTokenRequest`].
///
/// The token string passes through unchanged on success. Fails with
/// [`ValidationError::MissingField`] when `access_token` is absent,
/// [`ValidationError::TypeMismatch`] when it is not a string, and
/// [`ValidationError::InvalidFormat`] when the format predicate rejects it.
pub fn validate_access_token_request(
    fields: &Map<String, Value>,
) -> Result<AccessTokenRequest, ValidationError> {
    check_object(SCHEMA, fields)?;
    let access_token = require_str(fields, "access_token")?.to_owned();
    debug!(token = %access_token, "access token accepted");
    Ok(AccessTokenRequest { access_token })
}

// ===========================================================================
// Tests
// ===========================================================================
