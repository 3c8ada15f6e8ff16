//! bookholder library root.
//! Exposes the scoped-connection storage layer, the book repository, the
//! synthetic data generator and the CLI dispatcher.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod export;
pub mod generator;
pub mod logging;
pub mod models;
pub mod repository;
pub mod ui;
pub mod utils;

pub use db::{ScopedConnection, SqliteConfig, SqliteDriver};
pub use errors::{AppError, AppResult};
pub use generator::BookGenerator;
pub use models::book::{Book, NewBook};
pub use repository::BookRepository;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Demo { .. } => cli::commands::demo::handle(&cli.command, cfg),
        Commands::Seed { .. } => cli::commands::seed::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Count { .. } => cli::commands::count::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Del { .. } | Commands::Clean { .. } | Commands::Drop { .. } => {
            cli::commands::del::handle(&cli.command, cfg)
        }
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    logging::init_logging(&cfg.log_level).map_err(AppError::Config)?;

    dispatch(&cli, &cfg)
}
