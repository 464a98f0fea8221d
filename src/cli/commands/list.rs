use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::shift::Shift;
use crate::utils::date::{current_month, month_bounds};
use crate::utils::table::{Column, Table};
use std::collections::HashMap;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::List {
        month,
        employer,
        site,
        status,
    } = cmd
    {
        let month = month.clone().unwrap_or_else(current_month);
        let (start, end) =
            month_bounds(&month).ok_or_else(|| AppError::InvalidMonth(month.clone()))?;

        let pool = DbPool::new(&cfg.database)?;
        let conn = &pool.conn;

        let shifts = queries::load_shifts_between(conn, user, &start, &end)?;

        let employers: HashMap<i64, String> = queries::employers_for_user(conn, user)?
            .into_iter()
            .map(|e| (e.id, e.name))
            .collect();
        let sites: HashMap<i64, String> = queries::sites_for_user(conn, user)?
            .into_iter()
            .map(|s| (s.id, s.site_name))
            .collect();

        // In-memory filtering over the month snapshot, as the history
        // view does: substring on names, exact on status.
        let filtered: Vec<&Shift> = shifts
            .iter()
            .filter(|s| {
                let emp = employers
                    .get(&s.employer_id)
                    .map(String::as_str)
                    .unwrap_or("");
                let site_name = sites.get(&s.site_id).map(String::as_str).unwrap_or("");

                let emp_ok = employer
                    .as_deref()
                    .map(|q| emp.to_lowercase().contains(&q.to_lowercase()))
                    .unwrap_or(true);
                let site_ok = site
                    .as_deref()
                    .map(|q| site_name.to_lowercase().contains(&q.to_lowercase()))
                    .unwrap_or(true);
                let status_ok = status
                    .as_deref()
                    .map(|q| s.status.to_db_str().eq_ignore_ascii_case(q.trim()))
                    .unwrap_or(true);

                emp_ok && site_ok && status_ok
            })
            .collect();

        if filtered.is_empty() {
            println!("No shifts found for {}.", month);
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("ID", 5),
            Column::new("Date", 10),
            Column::new("Time", 13),
            Column::new("Employer", 18),
            Column::new("Site", 18),
            Column::new("Hours", 6),
            Column::new("Earnings", 10),
            Column::new("Status", 10),
        ]);

        let mut total_hours = 0.0;
        let mut total_earnings = 0.0;

        for s in &filtered {
            total_hours += s.hours;
            total_earnings += s.total_earnings;

            let time = if s.start_time.is_some() || s.end_time.is_some() {
                format!("{} - {}", s.start_str(), s.end_str())
            } else {
                String::new()
            };

            table.add_row(vec![
                s.id.to_string(),
                s.date_str(),
                time,
                employers.get(&s.employer_id).cloned().unwrap_or_default(),
                sites.get(&s.site_id).cloned().unwrap_or_default(),
                format!("{:.2}", s.hours),
                format!("{}{:.2}", cfg.currency, s.total_earnings),
                s.status.to_db_str().to_string(),
            ]);
        }

        println!("\nShifts for {}:\n", month);
        print!("{}", table.render());
        println!(
            "\nTotals: {} shifts | {:.2} hours | {}{:.2}",
            filtered.len(),
            total_hours,
            cfg.currency,
            total_earnings
        );
    }
    Ok(())
}
