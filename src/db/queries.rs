use crate::core::import::{ImportBatch, RecordRef};
use crate::errors::{AppError, AppResult};
use crate::models::employer::Employer;
use crate::models::shift::Shift;
use crate::models::site::Site;
use crate::models::status::ShiftStatus;
use crate::utils::time::parse_time_lenient;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, Row, params};

// ---------------------------------------------------------------------
// Row mapping
// ---------------------------------------------------------------------

pub fn map_shift_row(row: &Row) -> rusqlite::Result<Shift> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    // Times may be empty or carry lenient import garbage; both read as None.
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let status_str: String = row.get("status")?;

    Ok(Shift {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        start_time: parse_time_lenient(&start_str),
        end_time: parse_time_lenient(&end_str),
        hours: row.get("hours")?,
        hourly_rate: row.get("hourly_rate")?,
        total_earnings: row.get("total_earnings")?,
        status: ShiftStatus::from_db_str(&status_str),
        employer_id: row.get("employer_id")?,
        site_id: row.get("site_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn map_employer_row(row: &Row) -> rusqlite::Result<Employer> {
    Ok(Employer {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        name: row.get("name")?,
        default_rate: row.get("default_rate")?,
        created_at: row.get("created_at")?,
    })
}

fn map_site_row(row: &Row) -> rusqlite::Result<Site> {
    Ok(Site {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        site_name: row.get("site_name")?,
        postal_code: row.get("postal_code")?,
        created_at: row.get("created_at")?,
    })
}

// ---------------------------------------------------------------------
// Employers
// ---------------------------------------------------------------------

pub fn employers_for_user(conn: &Connection, user: &str) -> AppResult<Vec<Employer>> {
    let mut stmt =
        conn.prepare("SELECT * FROM employers WHERE user_id = ?1 ORDER BY name COLLATE NOCASE")?;
    let rows = stmt.query_map([user], map_employer_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Case-insensitive exact lookup on the trimmed name.
pub fn find_employer(conn: &Connection, user: &str, name: &str) -> AppResult<Option<Employer>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM employers
         WHERE user_id = ?1 AND name = ?2 COLLATE NOCASE",
    )?;
    let mut rows = stmt.query_map(params![user, name.trim()], map_employer_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn insert_employer(
    conn: &Connection,
    user: &str,
    name: &str,
    default_rate: Option<f64>,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO employers (user_id, name, default_rate, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![user, name.trim(), default_rate, Local::now().to_rfc3339()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn update_employer_rate(conn: &Connection, id: i64, rate: f64) -> AppResult<()> {
    conn.execute(
        "UPDATE employers SET default_rate = ?1 WHERE id = ?2",
        params![rate, id],
    )?;
    Ok(())
}

// ---------------------------------------------------------------------
// Sites
// ---------------------------------------------------------------------

pub fn sites_for_user(conn: &Connection, user: &str) -> AppResult<Vec<Site>> {
    let mut stmt =
        conn.prepare("SELECT * FROM sites WHERE user_id = ?1 ORDER BY site_name COLLATE NOCASE")?;
    let rows = stmt.query_map([user], map_site_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn find_site(conn: &Connection, user: &str, site_name: &str) -> AppResult<Option<Site>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM sites
         WHERE user_id = ?1 AND site_name = ?2 COLLATE NOCASE",
    )?;
    let mut rows = stmt.query_map(params![user, site_name.trim()], map_site_row)?;
    match rows.next() {
        Some(r) => Ok(Some(r?)),
        None => Ok(None),
    }
}

pub fn insert_site(
    conn: &Connection,
    user: &str,
    site_name: &str,
    postal_code: &str,
) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sites (user_id, site_name, postal_code, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            user,
            site_name.trim(),
            postal_code.trim(),
            Local::now().to_rfc3339()
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

// ---------------------------------------------------------------------
// Shifts
// ---------------------------------------------------------------------

pub fn insert_shift(conn: &Connection, shift: &Shift) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO shifts (user_id, date, start_time, end_time, hours, hourly_rate,
                             total_earnings, status, employer_id, site_id, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
        params![
            shift.user_id,
            shift.date_str(),
            shift.start_str(),
            shift.end_str(),
            shift.hours,
            shift.hourly_rate,
            shift.total_earnings,
            shift.status.to_db_str(),
            shift.employer_id,
            shift.site_id,
            shift.created_at,
            shift.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update all editable fields of a shift. Status changes through here are
/// explicit edits, the one sanctioned path backwards in the lifecycle.
pub fn update_shift(conn: &Connection, shift: &Shift) -> AppResult<()> {
    conn.execute(
        "UPDATE shifts
         SET date = ?1, start_time = ?2, end_time = ?3, hours = ?4,
             hourly_rate = ?5, total_earnings = ?6, status = ?7,
             employer_id = ?8, site_id = ?9, updated_at = ?10
         WHERE id = ?11 AND user_id = ?12",
        params![
            shift.date_str(),
            shift.start_str(),
            shift.end_str(),
            shift.hours,
            shift.hourly_rate,
            shift.total_earnings,
            shift.status.to_db_str(),
            shift.employer_id,
            shift.site_id,
            Local::now().to_rfc3339(),
            shift.id,
            shift.user_id,
        ],
    )?;
    Ok(())
}

pub fn update_shift_status(
    conn: &Connection,
    user: &str,
    id: i64,
    status: &ShiftStatus,
) -> AppResult<()> {
    conn.execute(
        "UPDATE shifts SET status = ?1, updated_at = ?2 WHERE id = ?3 AND user_id = ?4",
        params![status.to_db_str(), Local::now().to_rfc3339(), id, user],
    )?;
    Ok(())
}

pub fn delete_shift(conn: &Connection, user: &str, id: i64) -> AppResult<()> {
    let affected = conn.execute(
        "DELETE FROM shifts WHERE id = ?1 AND user_id = ?2",
        params![id, user],
    )?;
    if affected == 0 {
        return Err(AppError::ShiftNotFound(id));
    }
    Ok(())
}

pub fn load_shift(conn: &Connection, user: &str, id: i64) -> AppResult<Shift> {
    let mut stmt = conn.prepare("SELECT * FROM shifts WHERE id = ?1 AND user_id = ?2")?;
    let mut rows = stmt.query_map(params![id, user], map_shift_row)?;
    match rows.next() {
        Some(r) => Ok(r?),
        None => Err(AppError::ShiftNotFound(id)),
    }
}

/// Shifts in an inclusive ISO date range, newest first.
pub fn load_shifts_between(
    conn: &Connection,
    user: &str,
    start: &str,
    end: &str,
) -> AppResult<Vec<Shift>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM shifts
         WHERE user_id = ?1 AND date BETWEEN ?2 AND ?3
         ORDER BY date DESC, id ASC",
    )?;
    let rows = stmt.query_map(params![user, start, end], map_shift_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// The most recent shifts, the dashboard's working set.
pub fn load_recent_shifts(conn: &Connection, user: &str, limit: usize) -> AppResult<Vec<Shift>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM shifts
         WHERE user_id = ?1
         ORDER BY date DESC, id ASC
         LIMIT ?2",
    )?;
    let rows = stmt.query_map(params![user, limit as i64], map_shift_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

// ---------------------------------------------------------------------
// Import batch commit
// ---------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct ImportOutcome {
    pub employers_created: usize,
    pub sites_created: usize,
    pub shifts_created: usize,
    pub rows_skipped: usize,
}

/// Apply a staged import batch in a single transaction.
///
/// All staged employers and sites are inserted first so staged shift
/// references can be resolved to fresh rowids. If anything fails the
/// transaction rolls back and no record from the batch is observable.
pub fn commit_import_batch(
    conn: &mut Connection,
    user: &str,
    batch: &ImportBatch,
) -> AppResult<ImportOutcome> {
    let tx = conn.transaction()?;
    let now = Local::now().to_rfc3339();

    let mut employer_ids = Vec::with_capacity(batch.employers.len());
    for emp in &batch.employers {
        tx.execute(
            "INSERT INTO employers (user_id, name, default_rate, created_at)
             VALUES (?1, ?2, NULL, ?3)",
            params![user, emp.name, now],
        )?;
        employer_ids.push(tx.last_insert_rowid());
    }

    let mut site_ids = Vec::with_capacity(batch.sites.len());
    for site in &batch.sites {
        tx.execute(
            "INSERT INTO sites (user_id, site_name, postal_code, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![user, site.site_name, site.postal_code, now],
        )?;
        site_ids.push(tx.last_insert_rowid());
    }

    let resolve = |r: &RecordRef, ids: &[i64]| -> AppResult<i64> {
        match r {
            RecordRef::Existing(id) => Ok(*id),
            RecordRef::Staged(idx) => ids
                .get(*idx)
                .copied()
                .ok_or_else(|| AppError::Import(format!("dangling staged reference {}", idx))),
        }
    };

    for shift in &batch.shifts {
        let employer_id = resolve(&shift.employer, &employer_ids)?;
        let site_id = resolve(&shift.site, &site_ids)?;

        tx.execute(
            "INSERT INTO shifts (user_id, date, start_time, end_time, hours, hourly_rate,
                                 total_earnings, status, employer_id, site_id, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            params![
                user,
                shift.date,
                shift.start_time,
                shift.end_time,
                shift.hours,
                shift.hourly_rate,
                shift.total_earnings,
                shift.status.to_db_str(),
                employer_id,
                site_id,
                now,
                now,
            ],
        )?;
    }

    tx.commit()?;

    Ok(ImportOutcome {
        employers_created: batch.employers.len(),
        sites_created: batch.sites.len(),
        shifts_created: batch.shifts.len(),
        rows_skipped: batch.skipped,
    })
}
