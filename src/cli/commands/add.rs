use crate::cli::parser::Commands;
use crate::core::add::{AddLogic, NewShift, ShiftEdit};
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::status::ShiftStatus;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Add a shift or edit an existing one.
pub fn handle(cmd: &Commands, cfg: &crate::config::Config, user: &str) -> AppResult<()> {
    if let Commands::Add {
        date,
        employer,
        site,
        postal_code,
        start,
        hours,
        rate,
        update_rate,
        status,
        edit,
        id,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start_parsed = parse_optional_time(start.as_ref())?;

        // A shift is at most one day; anything outside (0, 24] is a typo,
        // and huge values would overflow the end-time arithmetic.
        if let Some(h) = hours {
            if !(*h > 0.0 && *h <= 24.0) {
                return Err(AppError::Other(format!(
                    "Invalid --hours value: {} (expected a duration between 0 and 24)",
                    h
                )));
            }
        }

        let mut pool = DbPool::new(&cfg.database)?;

        if *edit {
            let shift_id =
                id.ok_or_else(|| AppError::Other("Missing --id when using --edit.".into()))?;

            let edit_input = ShiftEdit {
                date: Some(d),
                start: start_parsed,
                hours: *hours,
                rate: *rate,
                status: status.as_deref().map(ShiftStatus::from_db_str),
            };

            AddLogic::edit(&mut pool, user, shift_id, edit_input)?;
            return Ok(());
        }

        // Create mode: employer, site, hours and rate are mandatory.
        let employer = employer
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::Other("Missing --employer.".into()))?;
        let site = site
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::Other("Missing --site.".into()))?;
        let hours = hours.ok_or_else(|| AppError::Other("Missing --hours.".into()))?;
        let rate = rate.ok_or_else(|| AppError::Other("Missing --rate.".into()))?;

        AddLogic::create(
            &mut pool,
            user,
            NewShift {
                date: d,
                employer: employer.to_string(),
                site: site.to_string(),
                postal_code: postal_code.clone().unwrap_or_default(),
                start: start_parsed,
                hours,
                rate,
                update_rate: *update_rate,
            },
        )?;
    }

    Ok(())
}
