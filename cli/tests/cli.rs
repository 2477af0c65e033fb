//! End-to-end tests for the `recordcheck` binary.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn recordcheck() -> Command {
    Command::cargo_bin("recordcheck").expect("binary builds")
}

#[test]
fn valid_token_from_stdin() {
    recordcheck()
        .args(["--shape", "token"])
        .write_stdin(r#"{"access_token": "test_token"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("test_token"));
}

#[test]
fn missing_token_fails_with_field_name() {
    recordcheck()
        .args(["--shape", "token"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("access_token"));
}

#[test]
fn valid_user_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"id": 101010, "first_name": "Anastasia", "last_name": "Tsytsartseva"}}"#
    )
    .expect("write fixture");

    recordcheck()
        .args(["--shape", "user"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Tsytsartseva"));
}

#[test]
fn user_batch_rejects_first_bad_record() {
    recordcheck()
        .args(["--shape", "users"])
        .write_stdin(r#"[{"id": 1, "first_name": "User", "last_name": "1"}, {"invalid_attr": "value"}]"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required field `id`"));
}

#[test]
fn malformed_json_is_a_usage_error() {
    recordcheck()
        .args(["--shape", "user"])
        .write_stdin("not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not valid JSON"));
}
