//! # Validation conformance suite
//!
//! Runs the documented end-to-end scenarios through the public API: raw JSON
//! fixtures in, validated records or typed rejections out. Unit-level edge
//! cases live next to each module; this suite exercises the caller-facing
//! surface the way a consumer of the crate would.

use pretty_assertions::assert_eq;
use recordcheck_core::{
    validate_access_token_request, validate_user, validate_users, AccessTokenRequest, User,
    ValidationError,
};
use serde_json::{json, Value};

// ---------------------------------------------------------------------------
// Shared harness
// ---------------------------------------------------------------------------

fn object(value: &Value) -> &serde_json::Map<String, Value> {
    value.as_object().expect("fixture is a JSON object")
}

// ---------------------------------------------------------------------------
// Access-token scenarios
// ---------------------------------------------------------------------------

#[test]
fn token_request_accepted() {
    let raw = json!({ "access_token": "test_token" });
    let request = validate_access_token_request(object(&raw)).unwrap();
    assert_eq!(
        request,
        AccessTokenRequest {
            access_token: "test_token".into()
        }
    );
}

#[test]
fn token_request_empty_mapping() {
    let raw = json!({});
    let err = validate_access_token_request(object(&raw)).unwrap_err();
    assert_eq!(err, ValidationError::MissingField("access_token".into()));
}

#[test]
fn token_request_bad_format() {
    let raw = json!({ "access_token": "invalid_token_format" });
    let err = validate_access_token_request(object(&raw)).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    assert_eq!(err.field(), "access_token");
}

// ---------------------------------------------------------------------------
// User scenarios
// ---------------------------------------------------------------------------

#[test]
fn user_batch_of_two_preserves_order_and_values() {
    let records = vec![
        json!({ "id": 101010, "first_name": "Anastasia", "last_name": "Tsytsartseva" }),
        json!({ "id": 10101, "first_name": "Ivan", "last_name": "Dorn" }),
    ];
    let users = validate_users(&records).unwrap();
    assert_eq!(
        users,
        vec![
            User {
                id: 101010,
                first_name: "Anastasia".into(),
                last_name: "Tsytsartseva".into(),
            },
            User {
                id: 10101,
                first_name: "Ivan".into(),
                last_name: "Dorn".into(),
            },
        ]
    );
}

#[test]
fn user_batch_of_one_thousand() {
    let records: Vec<Value> = (0..1000)
        .map(|i| json!({ "id": i, "first_name": "User", "last_name": i.to_string() }))
        .collect();

    let users = validate_users(&records).unwrap();
    assert_eq!(users.len(), 1000);

    let last = users.last().unwrap();
    assert_eq!(last.id, 999);
    assert_eq!(last.first_name, "User");
    assert_eq!(last.last_name, "999");
}

#[test]
fn user_record_with_only_unknown_keys() {
    let records = vec![json!({ "invalid_attr": "value" })];
    let err = validate_users(&records).unwrap_err();
    assert_eq!(err, ValidationError::MissingField("id".into()));
}

#[test]
fn user_record_with_string_id() {
    let raw = json!({
        "id": "invalid_id_format",
        "first_name": "Anastasia",
        "last_name": "Tsytsartseva"
    });
    let err = validate_user(object(&raw)).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TypeMismatch {
            field: "id".into(),
            expected: "integer",
        }
    );
}

#[test]
fn user_empty_batch() {
    let users = validate_users(&[]).unwrap();
    assert!(users.is_empty());
}

// ---------------------------------------------------------------------------
// Idempotence: validated output re-validates cleanly
// ---------------------------------------------------------------------------

#[test]
fn validated_user_revalidates() {
    let raw = json!({ "id": 7, "first_name": "User", "last_name": "7" });
    let first = validate_user(object(&raw)).unwrap();

    let round_tripped = serde_json::to_value(&first).unwrap();
    let second = validate_user(object(&round_tripped)).unwrap();
    assert_eq!(first, second);
}
