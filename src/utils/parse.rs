//! Lenient numeric parsing for import rows and form-style input.
//!
//! Source files carry values like "£1,250.50"; the policy is to strip
//! currency symbols and thousands separators, then default to 0 on
//! anything unparseable. Never an error.

use regex::Regex;
use std::sync::OnceLock;

static NON_NUMERIC: OnceLock<Regex> = OnceLock::new();

fn non_numeric() -> &'static Regex {
    NON_NUMERIC.get_or_init(|| Regex::new(r"[^0-9.\-]").unwrap())
}

/// Parse a decimal out of loosely formatted text. Currency symbols and
/// grouping characters are stripped first; missing or unparseable input
/// yields 0.
pub fn parse_decimal(raw: &str) -> f64 {
    let cleaned = non_numeric().replace_all(raw.trim(), "");
    cleaned.parse::<f64>().unwrap_or(0.0)
}

/// Round to 2 decimal places, the write-time contract for earnings.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
