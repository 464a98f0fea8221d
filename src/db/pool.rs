//! Single-connection SQLite handle. One CLI invocation opens exactly
//! one connection, so a real pool would be overkill.

use crate::errors::AppResult;
use rusqlite::Connection;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open (creating if needed) the database at `path`. Foreign keys
    /// are enforced; the schema itself is managed by `db::migrate`.
    pub fn new(path: &str) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        Ok(Self { conn })
    }
}
