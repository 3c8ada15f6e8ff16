use super::open_repository;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use std::fs;
use std::path::Path;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and configuration file (skipped in test mode)
///  - the books table in the configured database
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let cfg = if cli.test {
        cfg.clone()
    } else {
        let fresh = Config::for_init(cli.db.as_deref());
        let path = fresh.save()?;
        success(format!("Config file: {}", path.display()));
        fresh
    };

    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let repo = open_repository(&cfg)?;
    repo.create_table()?;

    success(format!(
        "Table '{}' ready in {}",
        repo.table(),
        &cfg.database
    ));
    Ok(())
}
