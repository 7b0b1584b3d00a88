//! rStreak library root.
//! Exposes the streak core (tracker, milestones, quotes), its stores, the
//! CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::clock::{Clock, clock_from_override};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli, clock),
        Commands::Status { .. } => commands::status::handle(&cli.command, cfg, clock),
        Commands::Reset { .. } => commands::reset::handle(&cli.command, cfg, clock),
        Commands::Edit { .. } => commands::edit::handle(&cli.command, cfg, clock),
        Commands::Motivate => commands::motivate::handle(cfg, clock),
        Commands::Quote { .. } => commands::quote::handle(&cli.command),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line override of the DB path
    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }

    // 4️⃣ real clock, or the one pinned by --at
    let clock = clock_from_override(cli.at.as_deref())?;

    dispatch(&cli, &cfg, clock.as_ref())
}
