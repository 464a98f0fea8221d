use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Convert an import row date from `M/D/YYYY` to canonical zero-padded
/// `YYYY-MM-DD`.
///
/// No range validation is done on month or day: malformed dates propagate
/// as-is rather than being rejected (lenient-import policy). Input that is
/// not three `/`-separated parts is returned unchanged.
pub fn us_to_iso(raw: &str) -> String {
    let parts: Vec<&str> = raw.trim().split('/').collect();
    if parts.len() != 3 {
        return raw.trim().to_string();
    }
    format!("{}-{:0>2}-{:0>2}", parts[2], parts[0], parts[1])
}

/// Format an ISO date string back to the import contract's `M/D/YYYY`.
/// Non-ISO input is passed through unchanged.
pub fn iso_to_us(iso: &str) -> String {
    match parse_date(iso) {
        Some(d) => format!("{}/{}/{}", d.month(), d.day(), d.year()),
        None => iso.to_string(),
    }
}

/// Current month as `YYYY-MM`.
pub fn current_month() -> String {
    today().format("%Y-%m").to_string()
}

/// First and last day of a `YYYY-MM` month, as ISO strings for BETWEEN
/// queries.
pub fn month_bounds(month: &str) -> Option<(String, String)> {
    let parts: Vec<&str> = month.split('-').collect();
    if parts.len() != 2 {
        return None;
    }
    let y: i32 = parts[0].parse().ok()?;
    let m: u32 = parts[1].parse().ok()?;
    let last = month_last_day(y, m)?;
    let first = NaiveDate::from_ymd_opt(y, m, 1)?;
    let end = NaiveDate::from_ymd_opt(y, m, last)?;
    Some((
        first.format("%Y-%m-%d").to_string(),
        end.format("%Y-%m-%d").to_string(),
    ))
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}

/// Monday of the week containing `d`, used for weekly earnings buckets.
pub fn week_start(d: NaiveDate) -> NaiveDate {
    let back = d.weekday().num_days_from_monday() as i64;
    d - chrono::Duration::days(back)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn us_to_iso_pads_month_and_day() {
        assert_eq!(us_to_iso("3/7/2024"), "2024-03-07");
        assert_eq!(us_to_iso("12/31/2023"), "2023-12-31");
    }

    #[test]
    fn us_to_iso_does_not_validate_ranges() {
        // Lenient by design: garbage propagates, it is not rejected.
        assert_eq!(us_to_iso("13/45/2024"), "2024-13-45");
    }

    #[test]
    fn us_to_iso_passes_through_non_us_input() {
        assert_eq!(us_to_iso("2024-03-07"), "2024-03-07");
        assert_eq!(us_to_iso(""), "");
    }

    #[test]
    fn iso_to_us_round_trip() {
        assert_eq!(iso_to_us("2024-03-07"), "3/7/2024");
        assert_eq!(us_to_iso(&iso_to_us("2024-03-07")), "2024-03-07");
    }

    #[test]
    fn month_bounds_handles_february() {
        assert_eq!(
            month_bounds("2024-02"),
            Some(("2024-02-01".into(), "2024-02-29".into()))
        );
        assert_eq!(
            month_bounds("2023-02"),
            Some(("2023-02-01".into(), "2023-02-28".into()))
        );
        assert_eq!(month_bounds("2023-13"), None);
    }

    #[test]
    fn week_start_is_monday() {
        // 2024-05-15 is a Wednesday
        let d = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
        assert_eq!(week_start(d), NaiveDate::from_ymd_opt(2024, 5, 13).unwrap());
        // Monday maps to itself
        assert_eq!(
            week_start(NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()),
            NaiveDate::from_ymd_opt(2024, 5, 13).unwrap()
        );
    }
}
