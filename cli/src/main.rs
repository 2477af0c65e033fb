//! `recordcheck` — validate a JSON document against one of the known record
//! shapes and print the validated record.
//!
//! The core crate deliberately knows nothing about where raw mappings come
//! from; this binary is the file/stdin front-end.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use recordcheck_core::{
    validate_access_token_request, validate_user, validate_users, ValidationError,
};
use serde_json::Value;
use tracing::debug;

/// Record shape to validate the input against.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Shape {
    /// A single access-token request object.
    Token,
    /// A single user object.
    User,
    /// An array of user objects, validated fail-fast in order.
    Users,
}

#[derive(Parser)]
#[command(name = "recordcheck", version, about)]
struct Cli {
    /// Which record shape the input document must satisfy.
    #[arg(long, value_enum)]
    shape: Shape,

    /// Input file; reads stdin when omitted or `-`.
    input: Option<PathBuf>,
}

fn read_input(input: Option<&PathBuf>) -> Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn require_object(value: &Value) -> Result<&serde_json::Map<String, Value>> {
    value
        .as_object()
        .context("input document must be a JSON object")
}

/// Outer `Err` is a usage/IO problem; inner `Err` is a schema rejection.
fn run(cli: &Cli) -> Result<Result<Value, ValidationError>> {
    let raw = read_input(cli.input.as_ref())?;
    let document: Value = serde_json::from_str(&raw).context("input is not valid JSON")?;
    debug!(shape = ?cli.shape, "validating input document");

    let outcome = match cli.shape {
        Shape::Token => {
            validate_access_token_request(require_object(&document)?).map(serde_json::to_value)
        }
        Shape::User => validate_user(require_object(&document)?).map(serde_json::to_value),
        Shape::Users => {
            let records = document
                .as_array()
                .context("input document must be a JSON array")?;
            validate_users(records).map(serde_json::to_value)
        }
    };

    match outcome {
        Ok(serialized) => Ok(Ok(serialized.context("serializing validated record")?)),
        Err(rejection) => Ok(Err(rejection)),
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(Ok(record)) => {
            println!("{record}");
            ExitCode::SUCCESS
        }
        Ok(Err(rejection)) => {
            eprintln!("invalid: {rejection}");
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
