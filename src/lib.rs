//! timeledger library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, config_path: &Path) -> AppResult<()> {
    match &cli.command {
        None => cli::commands::add::handle(&Commands::Add { project: None }, cfg),
        Some(cmd @ Commands::Add { .. }) => cli::commands::add::handle(cmd, cfg),
        Some(cmd @ Commands::Totals { .. }) => cli::commands::totals::handle(cmd, cfg),
        Some(Commands::Projects) => cli::commands::projects::handle(cfg),
        Some(cmd @ Commands::Config { .. }) => {
            cli::commands::config::handle(cmd, cfg, config_path)
        }
    }
}

/// Diagnostics go to stderr so they never mix with prompts.
fn init_tracing(verbose: u8, configured: &str) {
    let level = match verbose {
        0 => configured.parse().unwrap_or(LevelFilter::WARN),
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // a subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let config_path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);
    let mut cfg = Config::load(&config_path)?;

    // 3️⃣ apply ledger directory override from the command line
    if let Some(dir) = &cli.dir {
        cfg.ledger_dir = dir.clone();
    }

    init_tracing(cli.verbose, &cfg.log_level);
    tracing::debug!(config = %config_path.display(), ledger_dir = %cfg.ledger_dir, "configuration loaded");

    // 4️⃣ hand everything to the dispatcher
    dispatch(&cli, &cfg, &config_path)
}
