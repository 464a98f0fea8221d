//! High-level business logic for the `add` command: create a shift from
//! form-style input, reconciling the typed employer and site names to
//! existing records or creating them, and edit an existing shift.

use crate::core::schedule::compute_end_time;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::shift::Shift;
use crate::models::status::ShiftStatus;
use crate::ui::messages::{info, success};
use crate::utils::parse::round2;
use chrono::{NaiveDate, NaiveTime};

/// Input for a new shift, already parsed into typed values.
#[derive(Debug)]
pub struct NewShift {
    pub date: NaiveDate,
    pub employer: String,
    pub site: String,
    pub postal_code: String,
    pub start: Option<NaiveTime>,
    pub hours: f64,
    pub rate: f64,
    /// Update the employer's stored default rate when it differs.
    pub update_rate: bool,
}

/// Optional overrides for an edit; unset fields keep their value.
#[derive(Debug, Default)]
pub struct ShiftEdit {
    pub date: Option<NaiveDate>,
    pub start: Option<NaiveTime>,
    pub hours: Option<f64>,
    pub rate: Option<f64>,
    pub status: Option<ShiftStatus>,
}

pub struct AddLogic;

impl AddLogic {
    /// Create a shift. New entries always start `pending`; the derived
    /// end time and the earnings are fixed here, at write time.
    pub fn create(pool: &mut DbPool, user: &str, input: NewShift) -> AppResult<i64> {
        let conn = &pool.conn;

        let employer_id = match queries::find_employer(conn, user, &input.employer)? {
            Some(emp) => {
                let differs = emp
                    .default_rate
                    .map(|r| (r - input.rate).abs() > f64::EPSILON)
                    .unwrap_or(true);
                if differs && input.update_rate {
                    queries::update_employer_rate(conn, emp.id, input.rate)?;
                    info(format!("Updated default rate for {}", emp.name));
                }
                emp.id
            }
            None => queries::insert_employer(conn, user, &input.employer, Some(input.rate))?,
        };

        let site_id = match queries::find_site(conn, user, &input.site)? {
            Some(site) => site.id,
            None => {
                let postcode = input.postal_code.trim().to_uppercase();
                queries::insert_site(conn, user, &input.site, &postcode)?
            }
        };

        let end = compute_end_time(Some(input.date), input.start, Some(input.hours));
        let total = round2(input.hours * input.rate);

        let shift = Shift::new(
            user,
            input.date,
            input.start,
            end,
            input.hours,
            input.rate,
            total,
            employer_id,
            site_id,
        );

        let id = queries::insert_shift(conn, &shift)?;
        audit(conn, "add", &shift.date_str(), "Shift created")?;
        success(format!(
            "Shift #{} saved for {} ({} - {}, {:.2}h)",
            id,
            shift.date_str(),
            shift.start_str(),
            shift.end_str(),
            shift.hours
        ));
        Ok(id)
    }

    /// Edit an existing shift. End time and earnings are recomputed from
    /// the effective values. An explicit `--status` here is the one
    /// sanctioned way to move a shift's status backwards.
    pub fn edit(pool: &mut DbPool, user: &str, id: i64, edit: ShiftEdit) -> AppResult<()> {
        let conn = &pool.conn;
        let mut shift = queries::load_shift(conn, user, id)?;

        if let Some(d) = edit.date {
            shift.date = d;
        }
        if let Some(t) = edit.start {
            shift.start_time = Some(t);
        }
        if let Some(h) = edit.hours {
            shift.hours = h;
        }
        if let Some(r) = edit.rate {
            shift.hourly_rate = r;
        }
        if let Some(st) = edit.status {
            shift.status = st;
        }

        shift.end_time = compute_end_time(Some(shift.date), shift.start_time, Some(shift.hours));
        shift.total_earnings = round2(shift.hours * shift.hourly_rate);

        queries::update_shift(conn, &shift)?;
        audit(conn, "edit", &shift.date_str(), "Shift updated")?;
        success(format!("Shift #{} updated", id));
        Ok(())
    }
}
