use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                info(format!("Configuration file: {}", path.display()));
                println!("{}", content);
            } else {
                warning("No configuration file found; using defaults.");
                println!("{}", serde_yaml::to_string(cfg).unwrap_or_default());
            }
        }

        if *check {
            let problems = cfg.check();
            if problems.is_empty() {
                success("Configuration is valid.");
            } else {
                for p in problems {
                    warning(p);
                }
            }
        }
    }
    Ok(())
}
