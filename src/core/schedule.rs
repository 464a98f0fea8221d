//! Shift scheduling rules: end-time derivation, active-shift detection
//! and the clock-out gate. Pure functions over snapshot data; nothing
//! here touches the database.

use crate::models::shift::Shift;
use crate::models::status::ShiftStatus;
use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// A shift is surfaced one hour before its scheduled start, and the
/// clock-out button unlocks one hour before its scheduled end.
const WINDOW: Duration = Duration::hours(1);

/// Derive the end time-of-day from a date, start time and decimal hour
/// duration.
///
/// Any missing input (or a non-positive duration) means "not enough info
/// yet" and yields `None`; that is a valid state, not an error. The
/// calendar component of the result is discarded: a shift crossing
/// midnight shows only the wrapped time-of-day. Known simplification,
/// kept as-is.
pub fn compute_end_time(
    date: Option<NaiveDate>,
    start: Option<NaiveTime>,
    hours: Option<f64>,
) -> Option<NaiveTime> {
    let date = date?;
    let start = start?;
    let hours = hours.filter(|h| *h > 0.0)?;

    let begin = date.and_time(start);
    let end = begin + Duration::seconds((hours * 3600.0).round() as i64);
    Some(end.time())
}

/// Whether a shift qualifies as the current "active" session.
///
/// True when the shift is dated today, not completed, and either its
/// scheduled start is within ±1 hour of `now` or the user is already on
/// site. Once on site the shift stays surfaced for its whole duration,
/// however far past the start window `now` drifts. A shift with no
/// recorded start time can only qualify through the on-site branch.
pub fn is_shift_active(shift: &Shift, now: NaiveDateTime) -> bool {
    if shift.date != now.date() || shift.status.is_completed() {
        return false;
    }
    if shift.status.is_on_site() {
        return true;
    }
    match shift.start_time {
        Some(start) => {
            let start_instant = now.date().and_time(start);
            (now - start_instant).abs() <= WINDOW
        }
        None => false,
    }
}

/// Whether clocking out is currently permitted.
///
/// False unless the shift is on site; from there the gate opens one hour
/// before the scheduled end and never closes again, however far past the
/// end time `now` is. The end instant is built on today's date, matching
/// the active-shift evaluation.
pub fn can_clock_out(shift: &Shift, now: NaiveDateTime) -> bool {
    if !shift.status.is_on_site() {
        return false;
    }
    match shift.end_time {
        Some(end) => {
            let end_instant = now.date().and_time(end);
            end_instant - now <= WINDOW
        }
        None => false,
    }
}

/// Default lifecycle status for an imported row, from its date relative
/// to "today" (both canonical zero-padded ISO strings, compared
/// lexicographically).
///
/// Today imports as `on site`, the future as `pending`; past rows keep
/// whatever status the file carried (lower-cased), defaulting to
/// `completed`. Manual creation does not use this rule — new entries are
/// always `pending`, an intentional asymmetry.
pub fn derive_import_status(iso_date: &str, today: &str, csv_status: &str) -> ShiftStatus {
    if iso_date == today {
        ShiftStatus::OnSite
    } else if iso_date > today {
        ShiftStatus::Pending
    } else if csv_status.trim().is_empty() {
        ShiftStatus::Completed
    } else {
        ShiftStatus::from_db_str(csv_status)
    }
}

/// Pick the active shift out of a snapshot list (expected to be in
/// date-descending, id-ascending order). First match wins; several
/// qualifying shifts on one day is a data-entry anomaly and any
/// deterministic pick is acceptable.
pub fn find_active_shift(shifts: &[Shift], now: NaiveDateTime) -> Option<&Shift> {
    shifts.iter().find(|s| is_shift_active(s, now))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shift::Shift;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn t(s: &str) -> NaiveTime {
        NaiveTime::parse_from_str(s, "%H:%M").unwrap()
    }

    fn dt(date: &str, time: &str) -> NaiveDateTime {
        d(date).and_time(t(time))
    }

    fn shift(date: &str, start: &str, end: &str, status: ShiftStatus) -> Shift {
        let mut s = Shift::new(
            "default",
            d(date),
            Some(t(start)),
            Some(t(end)),
            8.0,
            15.0,
            120.0,
            1,
            1,
        );
        s.status = status;
        s
    }

    // ----- compute_end_time -----

    #[test]
    fn end_time_adds_whole_hours() {
        assert_eq!(
            compute_end_time(Some(d("2024-01-01")), Some(t("09:00")), Some(8.0)),
            Some(t("17:00"))
        );
    }

    #[test]
    fn end_time_adds_fractional_hours() {
        assert_eq!(
            compute_end_time(Some(d("2024-01-01")), Some(t("09:00")), Some(7.5)),
            Some(t("16:30"))
        );
    }

    #[test]
    fn end_time_wraps_past_midnight() {
        // Only the wrapped time-of-day is reported; the date is discarded.
        assert_eq!(
            compute_end_time(Some(d("2024-01-01")), Some(t("22:00")), Some(5.0)),
            Some(t("03:00"))
        );
    }

    #[test]
    fn end_time_missing_inputs_yield_none() {
        assert_eq!(compute_end_time(None, Some(t("09:00")), Some(8.0)), None);
        assert_eq!(compute_end_time(Some(d("2024-01-01")), None, Some(8.0)), None);
        assert_eq!(compute_end_time(Some(d("2024-01-01")), Some(t("09:00")), None), None);
        assert_eq!(
            compute_end_time(Some(d("2024-01-01")), Some(t("09:00")), Some(0.0)),
            None
        );
    }

    // ----- is_shift_active -----

    #[test]
    fn pending_shift_active_within_start_window() {
        let s = shift("2024-05-10", "09:00", "17:00", ShiftStatus::Pending);
        assert!(is_shift_active(&s, dt("2024-05-10", "08:00")));
        assert!(is_shift_active(&s, dt("2024-05-10", "09:59")));
        assert!(!is_shift_active(&s, dt("2024-05-10", "07:59")));
        assert!(!is_shift_active(&s, dt("2024-05-10", "10:01")));
    }

    #[test]
    fn completed_shift_never_active() {
        let s = shift("2024-05-10", "09:00", "17:00", ShiftStatus::Completed);
        assert!(!is_shift_active(&s, dt("2024-05-10", "09:00")));
    }

    #[test]
    fn wrong_day_never_active() {
        let s = shift("2024-05-10", "09:00", "17:00", ShiftStatus::Pending);
        assert!(!is_shift_active(&s, dt("2024-05-11", "09:00")));
    }

    #[test]
    fn on_site_shift_stays_active_outside_window() {
        // Once clocked in, the shift stays surfaced however far past the
        // ±1h start window the clock drifts.
        let s = shift("2024-05-10", "09:00", "17:00", ShiftStatus::OnSite);
        assert!(is_shift_active(&s, dt("2024-05-10", "15:30")));
    }

    #[test]
    fn shift_without_start_time_needs_on_site() {
        let mut s = shift("2024-05-10", "09:00", "17:00", ShiftStatus::Pending);
        s.start_time = None;
        assert!(!is_shift_active(&s, dt("2024-05-10", "09:00")));
        s.status = ShiftStatus::OnSite;
        assert!(is_shift_active(&s, dt("2024-05-10", "09:00")));
    }

    // ----- can_clock_out -----

    #[test]
    fn clock_out_gate_opens_one_hour_before_end() {
        let s = shift("2024-05-10", "09:00", "17:00", ShiftStatus::OnSite);
        assert!(!can_clock_out(&s, dt("2024-05-10", "15:59")));
        assert!(can_clock_out(&s, dt("2024-05-10", "16:00")));
        assert!(can_clock_out(&s, dt("2024-05-10", "17:00")));
        // ...and stays open indefinitely after the scheduled end.
        assert!(can_clock_out(&s, dt("2024-05-10", "23:30")));
    }

    #[test]
    fn clock_out_requires_on_site() {
        let s = shift("2024-05-10", "09:00", "17:00", ShiftStatus::Pending);
        assert!(!can_clock_out(&s, dt("2024-05-10", "16:30")));
        let s = shift("2024-05-10", "09:00", "17:00", ShiftStatus::Completed);
        assert!(!can_clock_out(&s, dt("2024-05-10", "16:30")));
    }

    #[test]
    fn clock_out_without_end_time_is_blocked() {
        let mut s = shift("2024-05-10", "09:00", "17:00", ShiftStatus::OnSite);
        s.end_time = None;
        assert!(!can_clock_out(&s, dt("2024-05-10", "16:30")));
    }

    // ----- derive_import_status -----

    #[test]
    fn today_imports_as_on_site() {
        assert_eq!(
            derive_import_status("2024-05-10", "2024-05-10", ""),
            ShiftStatus::OnSite
        );
        // Even when the file carried a status.
        assert_eq!(
            derive_import_status("2024-05-10", "2024-05-10", "Completed"),
            ShiftStatus::OnSite
        );
    }

    #[test]
    fn future_imports_as_pending() {
        assert_eq!(
            derive_import_status("2024-05-11", "2024-05-10", "Completed"),
            ShiftStatus::Pending
        );
    }

    #[test]
    fn past_keeps_csv_status_or_defaults_completed() {
        assert_eq!(
            derive_import_status("2024-05-09", "2024-05-10", ""),
            ShiftStatus::Completed
        );
        assert_eq!(
            derive_import_status("2024-05-09", "2024-05-10", "Cancelled"),
            ShiftStatus::Other("cancelled".to_string())
        );
        assert_eq!(
            derive_import_status("2024-05-09", "2024-05-10", "on site"),
            ShiftStatus::OnSite
        );
    }

    // ----- find_active_shift -----

    #[test]
    fn first_match_wins_in_snapshot_order() {
        let a = shift("2024-05-10", "09:00", "17:00", ShiftStatus::Pending);
        let b = shift("2024-05-10", "09:30", "17:30", ShiftStatus::Pending);
        let list = vec![a, b];
        let found = find_active_shift(&list, dt("2024-05-10", "09:15")).unwrap();
        assert_eq!(found.start_time, Some(t("09:00")));
    }
}
