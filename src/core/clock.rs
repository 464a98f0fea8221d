//! Clock-in / clock-out transitions over the active shift.
//!
//! `pending → on site → completed`, forward only. The active shift is
//! located in the recent snapshot with the same detection the dashboard
//! uses; the clock-out gate opens one hour before the scheduled end.

use crate::core::schedule::{can_clock_out, find_active_shift};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::models::status::ShiftStatus;
use chrono::NaiveDateTime;

/// How many recent shifts to scan for the active one.
const RECENT_WINDOW: usize = 10;

pub struct ClockLogic;

impl ClockLogic {
    pub fn clock_in(pool: &mut DbPool, user: &str, now: NaiveDateTime) -> AppResult<Shift> {
        let conn = &pool.conn;
        let recent = queries::load_recent_shifts(conn, user, RECENT_WINDOW)?;

        let active = find_active_shift(&recent, now)
            .ok_or_else(|| AppError::NoActiveShift(now.date().to_string()))?;

        if !active.status.is_pending() {
            return Err(AppError::Clock(format!(
                "shift #{} is already '{}'",
                active.id, active.status
            )));
        }

        queries::update_shift_status(conn, user, active.id, &ShiftStatus::OnSite)?;
        audit(conn, "clock-in", &active.date_str(), "Shift set on site")?;

        let mut updated = active.clone();
        updated.status = ShiftStatus::OnSite;
        Ok(updated)
    }

    pub fn clock_out(pool: &mut DbPool, user: &str, now: NaiveDateTime) -> AppResult<Shift> {
        let conn = &pool.conn;
        let recent = queries::load_recent_shifts(conn, user, RECENT_WINDOW)?;

        let active = find_active_shift(&recent, now)
            .ok_or_else(|| AppError::NoActiveShift(now.date().to_string()))?;

        if !active.status.is_on_site() {
            return Err(AppError::Clock(format!(
                "shift #{} is '{}', not 'on site'",
                active.id, active.status
            )));
        }

        if !can_clock_out(active, now) {
            return Err(AppError::Clock(format!(
                "too early: clock-out opens one hour before the scheduled end ({})",
                active.end_str()
            )));
        }

        queries::update_shift_status(conn, user, active.id, &ShiftStatus::Completed)?;
        audit(conn, "clock-out", &active.date_str(), "Shift completed")?;

        let mut updated = active.clone();
        updated.status = ShiftStatus::Completed;
        Ok(updated)
    }
}
