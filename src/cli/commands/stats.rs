use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::bucket_earnings;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::date::month_bounds;
use crate::utils::parse::round2;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Stats { view, month } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        // Dates are stored as ISO text, so an open-ended range is just
        // the widest lexicographic bounds.
        let (start, end) = match month {
            Some(m) => month_bounds(m).ok_or_else(|| AppError::InvalidMonth(m.clone()))?,
            None => ("0000-01-01".to_string(), "9999-12-31".to_string()),
        };

        let shifts = queries::load_shifts_between(conn, user, &start, &end)?;

        if shifts.is_empty() {
            info("No shifts recorded for this period.");
            return Ok(());
        }

        let buckets = bucket_earnings(&shifts, *view);

        header("Earnings");
        let mut table = Table::new(vec![
            Column::new("Period", 12),
            Column::new("Hours", 8),
            Column::new("Earnings", 12),
        ]);
        let mut total_earnings = 0.0;
        let mut total_hours = 0.0;
        for bucket in &buckets {
            total_earnings += bucket.earnings;
            total_hours += bucket.hours;
            table.add_row(vec![
                bucket.label.clone(),
                format!("{:.2}", bucket.hours),
                format!("{}{:.2}", cfg.currency, round2(bucket.earnings)),
            ]);
        }
        print!("{}", table.render());

        println!(
            "Total: {:.2} hours | {}{:.2}",
            total_hours,
            cfg.currency,
            round2(total_earnings)
        );
    }
    Ok(())
}
