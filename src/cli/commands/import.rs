use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::{ImportRow, reconcile_import_batch};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::utils::date::today_iso;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_path(file)
            .map_err(|e| AppError::Import(format!("cannot open '{}': {}", file, e)))?;

        // Unreadable lines are tolerated the same way rows missing
        // mandatory fields are: dropped, not fatal.
        let mut rows: Vec<ImportRow> = Vec::new();
        let mut unreadable = 0usize;
        for result in rdr.deserialize() {
            match result {
                Ok(row) => rows.push(row),
                Err(_) => unreadable += 1,
            }
        }

        let mut pool = DbPool::new(&cfg.database)?;

        let existing_employers = queries::employers_for_user(&pool.conn, user)?;
        let existing_sites = queries::sites_for_user(&pool.conn, user)?;

        let today = today_iso();
        let mut batch =
            reconcile_import_batch(&rows, &existing_employers, &existing_sites, &today);
        batch.skipped += unreadable;

        if batch.is_empty() {
            info(format!(
                "Nothing to import from '{}' ({} rows skipped).",
                file, batch.skipped
            ));
            return Ok(());
        }

        // One transaction: either every staged record lands, or none do.
        let outcome = queries::commit_import_batch(&mut pool.conn, user, &batch)?;

        audit(
            &pool.conn,
            "import",
            file,
            &format!("Imported {} shifts", outcome.shifts_created),
        )?;

        success(format!(
            "Import successful: {} shifts ({} employers, {} sites created, {} rows skipped)",
            outcome.shifts_created,
            outcome.employers_created,
            outcome.sites_created,
            outcome.rows_skipped
        ));
    }
    Ok(())
}
