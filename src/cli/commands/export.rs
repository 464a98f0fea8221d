use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::logic::ExportLogic;
use crate::utils::date::current_month;

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let month = month.clone().unwrap_or_else(current_month);
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(
            &mut pool,
            user,
            &cfg.currency,
            *format,
            &month,
            file.as_deref(),
            *force,
        )?;
    }
    Ok(())
}
