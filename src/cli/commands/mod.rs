pub mod add;
pub mod config;
pub mod count;
pub mod del;
pub mod demo;
pub mod export;
pub mod init;
pub mod list;
pub mod seed;

use crate::config::Config;
use crate::db::SqliteDriver;
use crate::db::{ScopedConnection, SqliteConfig};
use crate::errors::AppResult;
use crate::repository::BookRepository;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Repository over the configured database, table and export file.
pub(crate) fn open_repository(cfg: &Config) -> AppResult<BookRepository<SqliteDriver>> {
    BookRepository::new(
        ScopedConnection::new(SqliteDriver, SqliteConfig::new(&cfg.database)),
        cfg.table.as_str(),
        cfg.export_file.as_str(),
    )
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
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
