//! CSV and JSON writers over the flat export row.

use crate::errors::{AppError, AppResult};
use crate::export::{ShiftExport, notify_export_success};
use std::fs;
use std::path::Path;

/// Write the rows as a CSV file; the header comes from the serde field
/// renames, matching the import contract.
pub(crate) fn export_csv(rows: &[ShiftExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("cannot create '{}': {}", path.display(), e)))?;

    for row in rows {
        wtr.serialize(row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }
    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Write the rows as pretty-printed JSON.
pub(crate) fn export_json(rows: &[ShiftExport], path: &Path) -> AppResult<()> {
    let body = serde_json::to_string_pretty(rows)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    fs::write(path, body)?;

    notify_export_success("JSON", path);
    Ok(())
}
