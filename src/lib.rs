//! bizdesk library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod i18n;
pub mod integrations;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::List { .. } | Commands::Show { .. } => {
            commands::list::handle(&cli.command, cfg)
        }
        Commands::Add { .. } | Commands::Edit { .. } => commands::add::handle(&cli.command, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::Stats { .. } => commands::stats::handle(&cli.command, cfg),
        Commands::Predict { .. } => commands::predict::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Chat { .. } => commands::chat::handle(&cli.command, cfg),
        Commands::Notify { .. } => commands::notify::handle(&cli.command, cfg),
        Commands::Device { .. } => commands::device::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    utils::colors::set_enabled(!cli.no_color);

    // config is loaded once, then overridden from the command line
    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = Config::resolve_db_path(custom_db)
            .to_string_lossy()
            .to_string();
    }
    if let Some(lang) = cli.lang {
        cfg.language = lang;
    }

    dispatch(&cli, &cfg)
}
