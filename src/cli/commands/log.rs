use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let pool = DbPool::new(&cfg.database)?;
            let rows = load_log(&pool.conn)?;

            if rows.is_empty() {
                info("Audit log is empty.");
                return Ok(());
            }

            for (date, operation, message) in rows {
                println!("{} | {:<10} | {}", date, operation, message);
            }
        }
    }
    Ok(())
}
