use serde_json::Value;
use std::io::{self, Read};

/// Read a piped JSON payload (a `LoanAccountInput`, typically) from stdin.
///
/// Returns None when stdin is an interactive TTY or the pipe is empty, so
/// callers can fall back to `--input` or report the missing input
/// themselves.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut piped = String::new();
    io::stdin().read_to_string(&mut piped)?;

    let trimmed = piped.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse piped JSON: {}", e))?;
    Ok(Some(value))
}
