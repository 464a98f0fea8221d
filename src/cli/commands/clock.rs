use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::ClockLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Clock {
        clock_in,
        clock_out,
    } = cmd
    {
        if *clock_in == *clock_out {
            return Err(AppError::Other(
                "Use exactly one of --in or --out.".to_string(),
            ));
        }

        let mut pool = DbPool::new(&cfg.database)?;
        let now = chrono::Local::now().naive_local();

        if *clock_in {
            let shift = ClockLogic::clock_in(&mut pool, user, now)?;
            success(format!(
                "Clocked in: shift #{} is now '{}'",
                shift.id, shift.status
            ));
        } else {
            let shift = ClockLogic::clock_out(&mut pool, user, now)?;
            success(format!(
                "Clocked out: shift #{} is now '{}'",
                shift.id, shift.status
            ));
        }
    }
    Ok(())
}
