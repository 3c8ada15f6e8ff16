use super::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::args::parse_count;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Seed { count } = cmd {
        let count = parse_count("count", count)?;
        let repo = open_repository(cfg)?;

        let inserted = repo.init_books(count)?;
        success(format!("Inserted {inserted} generated books."));
    }
    Ok(())
}
