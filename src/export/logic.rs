// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::to_export_row;
use crate::ui::messages::warning;
use crate::utils::date::month_bounds;
use std::collections::HashMap;
use std::path::PathBuf;

/// High-level export logic: load one month of shifts, resolve names,
/// write the selected format.
pub struct ExportLogic;

impl ExportLogic {
    /// Export a month (`YYYY-MM`) of shifts.
    ///
    /// `file` defaults to `Shifts_<month>.<format>` in the current
    /// directory, the original application's download naming.
    pub fn export(
        pool: &mut DbPool,
        user: &str,
        currency: &str,
        format: ExportFormat,
        month: &str,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let (start, end) =
            month_bounds(month).ok_or_else(|| AppError::InvalidMonth(month.to_string()))?;

        let path = match file {
            Some(f) => PathBuf::from(f),
            None => PathBuf::from(format!("Shifts_{}.{}", month, format.as_str())),
        };

        ensure_writable(&path, force)?;

        let conn = &pool.conn;
        let shifts = queries::load_shifts_between(conn, user, &start, &end)?;

        if shifts.is_empty() {
            warning(format!("No shifts found for {}.", month));
            return Ok(());
        }

        let employers: HashMap<i64, String> = queries::employers_for_user(conn, user)?
            .into_iter()
            .map(|e| (e.id, e.name))
            .collect();
        let sites: HashMap<i64, (String, String)> = queries::sites_for_user(conn, user)?
            .into_iter()
            .map(|s| (s.id, (s.site_name, s.postal_code)))
            .collect();

        let rows: Vec<_> = shifts
            .iter()
            .map(|s| to_export_row(s, &employers, &sites, currency))
            .collect();

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        crate::db::log::audit(
            &pool.conn,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {} shifts for {}", rows.len(), month),
        )?;

        Ok(())
    }
}
