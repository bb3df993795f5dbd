use serde_json::Value;

/// Pretty-print the command result as JSON to stdout.
///
/// This is the machine-readable format: Decimal fields stay at full
/// precision (as strings) for downstream consumers to round.
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
