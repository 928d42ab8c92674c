//! JSON I/O handling for the CLI
//!
//! - Input: a single JSON object via stdin
//! - Output: a single JSON object via stdout
//! - UTF-8 only

use std::io::{self, Read, Write};

use serde::Serialize;
use serde_json::Value;

use super::errors::{CliError, CliResult};

/// Read a JSON request from stdin.
///
/// The whole of stdin is consumed so that pretty-printed requests spanning
/// several lines are accepted.
pub fn read_request() -> CliResult<Value> {
    let mut input = String::new();
    io::stdin().lock().read_to_string(&mut input)?;
    parse_request(&input)
}

/// Parse a request body
pub fn parse_request(input: &str) -> CliResult<Value> {
    if input.trim().is_empty() {
        return Err(CliError::invalid_input("Empty input"));
    }

    let value: Value = serde_json::from_str(input)?;
    if !value.is_object() {
        return Err(CliError::invalid_input("Request must be a JSON object"));
    }
    Ok(value)
}

/// Success envelope
pub fn response_envelope<T: Serialize>(data: &T) -> CliResult<Value> {
    Ok(serde_json::json!({
        "status": "ok",
        "data": serde_json::to_value(data)?
    }))
}

/// Error envelope
pub fn error_envelope(code: &str, message: &str) -> Value {
    serde_json::json!({
        "status": "error",
        "code": code,
        "message": message
    })
}

/// Write a success response to stdout
pub fn write_response<T: Serialize>(data: &T) -> CliResult<()> {
    write_json(&response_envelope(data)?)
}

/// Write an error response to stdout
pub fn write_error(code: &str, message: &str) -> CliResult<()> {
    write_json(&error_envelope(code, message))
}

fn write_json(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
