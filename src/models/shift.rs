use super::status::ShiftStatus;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::Serialize;

/// One work session, owned by a single profile.
///
/// `end_time` is derived from `date` + `start_time` + `hours` at write time
/// and stored redundantly for display. `total_earnings` is fixed at write
/// time as `hours * hourly_rate`, rounded to 2 decimal places; it is never
/// recomputed reactively.
#[derive(Debug, Clone, Serialize)]
pub struct Shift {
    pub id: i64,
    pub user_id: String,
    pub date: NaiveDate,              // ⇔ shifts.date (TEXT "YYYY-MM-DD")
    pub start_time: Option<NaiveTime>, // ⇔ shifts.start_time (TEXT "HH:MM" or '')
    pub end_time: Option<NaiveTime>,   // ⇔ shifts.end_time (TEXT "HH:MM" or '')
    pub hours: f64,
    pub hourly_rate: f64,
    pub total_earnings: f64,
    pub status: ShiftStatus,
    pub employer_id: i64, // never 0 after creation
    pub site_id: i64,     // never 0 after creation
    pub created_at: String, // ISO8601
    pub updated_at: String, // ISO8601
}

impl Shift {
    /// High-level constructor for shifts created from the CLI.
    /// New entries always start `pending`.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        user_id: &str,
        date: NaiveDate,
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
        hours: f64,
        hourly_rate: f64,
        total_earnings: f64,
        employer_id: i64,
        site_id: i64,
    ) -> Self {
        let now = Local::now().to_rfc3339();
        Self {
            id: 0,
            user_id: user_id.to_string(),
            date,
            start_time,
            end_time,
            hours,
            hourly_rate,
            total_earnings,
            status: ShiftStatus::Pending,
            employer_id,
            site_id,
            created_at: now.clone(),
            updated_at: now,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }

    pub fn end_str(&self) -> String {
        self.end_time
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}
