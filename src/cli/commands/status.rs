use crate::config::Config;
use crate::core::schedule::{can_clock_out, find_active_shift};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::db::stats::range_totals;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::date::{current_month, month_bounds};
use std::collections::HashMap;

/// Dashboard view: monthly totals, the active shift (if any) and the
/// most recent entries.
pub fn handle(cfg: &Config, user: &str) -> AppResult<()> {
    let mut pool = DbPool::new(&cfg.database)?;

    let month = current_month();
    let (start, end) = month_bounds(&month).ok_or_else(|| AppError::InvalidMonth(month.clone()))?;

    let totals = range_totals(&mut pool, user, &start, &end)?;

    header(format!("Overview for {}", month));
    println!(
        "Earnings: {}{:.2} | Hours: {:.1} | Shifts: {}",
        cfg.currency, totals.earnings, totals.hours, totals.count
    );

    let conn = &pool.conn;
    let recent = queries::load_recent_shifts(conn, user, 5)?;

    let sites: HashMap<i64, String> = queries::sites_for_user(conn, user)?
        .into_iter()
        .map(|s| (s.id, s.site_name))
        .collect();

    let now = chrono::Local::now().naive_local();
    match find_active_shift(&recent, now) {
        Some(active) => {
            println!();
            header("Active session");
            let site = sites.get(&active.site_id).cloned().unwrap_or_default();
            println!(
                "Shift #{} at {} | {} - {} | status: {}",
                active.id,
                site,
                active.start_str(),
                active.end_str(),
                active.status
            );
            if active.status.is_pending() {
                println!("→ clock in with: shiftledger clock --in");
            } else if active.status.is_on_site() {
                if can_clock_out(active, now) {
                    println!("→ clock out with: shiftledger clock --out");
                } else {
                    println!(
                        "Clock-out opens one hour before the scheduled end ({}).",
                        active.end_str()
                    );
                }
            }
        }
        None => {
            println!("\nNo active shift right now.");
        }
    }

    if !recent.is_empty() {
        println!();
        header("Recent shifts");
        for s in &recent {
            println!(
                "#{:<4} {} | {} - {} | {} | {}{:.2} | {}",
                s.id,
                s.date_str(),
                s.start_str(),
                s.end_str(),
                sites.get(&s.site_id).cloned().unwrap_or_default(),
                cfg.currency,
                s.total_earnings,
                s.status
            );
        }
    }

    Ok(())
}
