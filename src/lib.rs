//! shiftledger library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    // Records belong to a profile; a --profile flag overrides the
    // configured one for a single invocation.
    let user = cli.profile.as_deref().unwrap_or(&cfg.profile);

    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg, user),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg, user),
        Commands::Status => cli::commands::status::handle(cfg, user),
        Commands::Clock { .. } => cli::commands::clock::handle(&cli.command, cfg, user),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg, user),
        Commands::Import { .. } => cli::commands::import::handle(&cli.command, cfg, user),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg, user),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, cfg, user),
        Commands::Backup { .. } => cli::commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Load the config once, then apply per-invocation overrides.
    let mut cfg = Config::load();
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
