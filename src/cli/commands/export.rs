use super::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::args::parse_integer;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { limit, file } = cmd {
        let limit = parse_integer("limit", limit)?;

        let mut cfg = cfg.clone();
        if let Some(path) = file {
            cfg.export_file = path.clone();
        }

        let repo = open_repository(&cfg)?;
        let written = repo.export_books_to_csv(limit)?;
        success(format!(
            "CSV export completed: {} ({written} books)",
            repo.export_path().display()
        ));
    }
    Ok(())
}
