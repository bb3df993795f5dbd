pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// Route a command's JSON value to the selected formatter. JSON keeps full
/// precision for machine consumers; the human-readable formats round
/// monetary values to cents.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// Decimals serialize as JSON strings; round them to two places for
/// display and pass every other string (ids, dates, statuses) through
/// untouched.
pub(crate) fn round_decimal_str(s: &str) -> String {
    match Decimal::from_str(s) {
        Ok(d) => d.round_dp(2).to_string(),
        Err(_) => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::round_decimal_str;

    #[test]
    fn test_rounds_decimal_strings_to_cents() {
        assert_eq!(round_decimal_str("483.9373868228238"), "483.94");
        assert_eq!(round_decimal_str("12000"), "12000");
        assert_eq!(round_decimal_str("-21.046"), "-21.05");
    }

    #[test]
    fn test_leaves_non_decimal_strings_alone() {
        assert_eq!(round_decimal_str("LN-2024-001"), "LN-2024-001");
        assert_eq!(round_decimal_str("2026-08-28"), "2026-08-28");
        assert_eq!(round_decimal_str("active"), "active");
    }
}
