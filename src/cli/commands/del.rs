use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config, user: &str) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !yes
            && !ask_confirmation(&format!(
                "Delete shift #{}? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        let shift = queries::load_shift(&pool.conn, user, *id)?;
        queries::delete_shift(&pool.conn, user, *id)?;
        audit(&pool.conn, "del", &shift.date_str(), "Shift deleted")?;
        success(format!("Shift #{} has been deleted.", id));
    }

    Ok(())
}
