//! JSON I/O handling for CLI
//!
//! - Input: one JSON document from a file or stdin
//! - Output: one JSON object on stdout
//! - UTF-8 only

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use super::errors::{CliError, CliResult};
use crate::validation::ValidationError;

/// Read the whole input document from `path`, or stdin when `None`
pub fn read_input(path: Option<&Path>) -> CliResult<String> {
    // Empty text is returned as-is; the validator reports it as malformed.
    match path {
        Some(path) => fs::read_to_string(path)
            .map_err(|e| CliError::io_error(format!("Failed to read {}: {}", path.display(), e))),
        None => {
            let mut buffer = String::new();
            io::stdin().lock().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Build the success envelope
pub fn response_envelope<T: Serialize>(data: &T) -> CliResult<Value> {
    Ok(serde_json::json!({
        "status": "ok",
        "data": serde_json::to_value(data)?
    }))
}

/// Build the failure envelope
pub fn error_envelope(err: &ValidationError) -> CliResult<Value> {
    Ok(serde_json::json!({
        "status": "error",
        "code": ValidationError::CODE,
        "model": err.model(),
        "violations": serde_json::to_value(err.violations())?
    }))
}

/// Write a success response to stdout
pub fn write_response<T: Serialize>(data: &T) -> CliResult<()> {
    write_line(&response_envelope(data)?)
}

/// Write a validation failure to stdout
pub fn write_validation_error(err: &ValidationError) -> CliResult<()> {
    write_line(&error_envelope(err)?)
}

fn write_line(value: &Value) -> CliResult<()> {
    let mut stdout = io::stdout();
    serde_json::to_writer(&mut stdout, value)?;
    writeln!(stdout)?;
    stdout.flush()?;

    Ok(())
}
