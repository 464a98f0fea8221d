//! Time utilities: parsing HH:MM and formatting time-of-day values.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// Parse an optional HH:MM string; `None` and empty strings mean "not set".
pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    match input {
        Some(s) if !s.trim().is_empty() => {
            let t = parse_time(s.trim()).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
            Ok(Some(t))
        }
        _ => Ok(None),
    }
}

/// Lenient variant for import rows: malformed times degrade to `None`
/// instead of raising.
pub fn parse_time_lenient(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    parse_time(s)
}
