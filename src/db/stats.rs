use crate::db::pool::DbPool;
use rusqlite::{OptionalExtension, params};
use std::fs;

/// Aggregated totals for one profile over an inclusive date range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Totals {
    pub earnings: f64,
    pub hours: f64,
    pub count: i64,
}

pub fn range_totals(
    pool: &mut DbPool,
    user: &str,
    start: &str,
    end: &str,
) -> rusqlite::Result<Totals> {
    pool.conn.query_row(
        "SELECT COALESCE(SUM(total_earnings), 0),
                COALESCE(SUM(hours), 0),
                COUNT(*)
         FROM shifts
         WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3",
        params![user, start, end],
        |row| {
            Ok(Totals {
                earnings: row.get(0)?,
                hours: row.get(1)?,
                count: row.get(2)?,
            })
        },
    )
}

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("• File: {}", db_path);
    println!("• Size: {:.2} MB", file_mb);

    for table in ["shifts", "employers", "sites"] {
        let count: i64 = pool
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })?;
        println!("• Total {}: {}", table, count);
    }

    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM shifts ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM shifts ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    println!("• Date range:");
    println!("    from: {}", first_date.unwrap_or_else(|| "--".into()));
    println!("    to:   {}", last_date.unwrap_or_else(|| "--".into()));

    println!();
    Ok(())
}
