use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::{run_pending_migrations, table_exists};
use crate::db::pool::DbPool;
use crate::db::stats::print_db_info;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            run_pending_migrations(&pool.conn)?;
            success("Migrations up to date.");
        }

        if *check {
            let mut ok = true;
            for table in ["shifts", "employers", "sites", "log"] {
                if !table_exists(&pool.conn, table)? {
                    warning(format!("Missing table: {}", table));
                    ok = false;
                }
            }
            let integrity: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if integrity != "ok" {
                warning(format!("Integrity check: {}", integrity));
                ok = false;
            }
            if ok {
                success("Database check passed.");
            }
        }

        if *vacuum {
            pool.conn.execute_batch("VACUUM")?;
            success("Database optimized.");
        }

        if *info {
            print_db_info(&mut pool, &cfg.database)?;
        }
    }
    Ok(())
}
