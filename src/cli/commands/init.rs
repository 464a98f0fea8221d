use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Initialize configuration and database.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.clone(), cli.test)?;

    if let Some(parent) = Path::new(&cfg.database).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    success(format!("Database initialized: {}", cfg.database));
    if !cli.test {
        success(format!(
            "Configuration written: {}",
            Config::config_file().display()
        ));
    }
    Ok(())
}
