//! # recordcheck-core
//!
//! Declarative validation for two record shapes: an access-token request and
//! a user profile. Each shape is a fixed schema table — field name, expected
//! JSON type, optional acceptance rule — interpreted by one generic routine.
//!
//! All entry points are pure, synchronous functions: a raw `serde_json`
//! mapping goes in, and either a validated immutable record or a
//! [`ValidationError`] naming the first offending field comes out. Nothing
//! panics on malformed input and nothing is coerced.
//!
//! ```
//! use recordcheck_core::{validate_user, User};
//! use serde_json::json;
//!
//! let raw = json!({ "id": 101010, "first_name": "Anastasia", "last_name": "Tsytsartseva" });
//! let user = validate_user(raw.as_object().unwrap()).unwrap();
//! assert_eq!(user.id, 101010);
//! ```

pub mod error;
pub mod schema;
pub mod token;
pub mod user;

pub use error::ValidationError;
pub use token::{validate_access_token_request, AccessTokenRequest};
pub use user::{validate_user, validate_users, validate_users_collect, User};
