//! Schema migrations, versioned through `PRAGMA user_version`.
//! All schema creation and upgrades happen here; nothing else in the
//! crate issues CREATE TABLE statements.

use crate::errors::{AppError, AppResult};
use rusqlite::Connection;

const SCHEMA_VERSION: i64 = 1;

pub fn current_version(conn: &Connection) -> AppResult<i64> {
    let v: i64 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    Ok(v)
}

/// Apply any migrations newer than the database's recorded version.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    let mut version = current_version(conn)?;

    while version < SCHEMA_VERSION {
        match version {
            0 => migrate_to_v1(conn)?,
            v => {
                return Err(AppError::Migration(format!(
                    "No migration path from schema version {}",
                    v
                )));
            }
        }
        version += 1;
        conn.execute_batch(&format!("PRAGMA user_version = {}", version))?;
    }

    Ok(())
}

/// v1: base schema. Employers and sites carry a case-insensitive unique
/// key per profile so differently-cased names can never create duplicates.
fn migrate_to_v1(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS employers (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      TEXT NOT NULL,
            name         TEXT NOT NULL,
            default_rate REAL,
            created_at   TEXT NOT NULL
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_employers_identity
            ON employers (user_id, name COLLATE NOCASE);

        CREATE TABLE IF NOT EXISTS sites (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id     TEXT NOT NULL,
            site_name   TEXT NOT NULL,
            postal_code TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );
        CREATE UNIQUE INDEX IF NOT EXISTS idx_sites_identity
            ON sites (user_id, site_name COLLATE NOCASE);

        CREATE TABLE IF NOT EXISTS shifts (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id        TEXT NOT NULL,
            date           TEXT NOT NULL,
            start_time     TEXT NOT NULL DEFAULT '',
            end_time       TEXT NOT NULL DEFAULT '',
            hours          REAL NOT NULL DEFAULT 0,
            hourly_rate    REAL NOT NULL DEFAULT 0,
            total_earnings REAL NOT NULL DEFAULT 0,
            status         TEXT NOT NULL DEFAULT 'pending',
            employer_id    INTEGER NOT NULL REFERENCES employers(id),
            site_id        INTEGER NOT NULL REFERENCES sites(id),
            created_at     TEXT NOT NULL,
            updated_at     TEXT NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_shifts_user_date
            ON shifts (user_id, date);

        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if a table exists (used by `db --check`).
pub fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists = stmt.exists([name])?;
    Ok(exists)
}
