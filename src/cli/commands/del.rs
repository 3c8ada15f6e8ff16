use super::{ask_confirmation, open_repository};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::args::parse_integer;

/// Handles `del`, `clean` and `drop`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Del { id, yes } => {
            let id = parse_integer("id", id)?;
            if !yes && !ask_confirmation(&format!("Delete book #{id}? This action is irreversible.")) {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = open_repository(cfg)?.delete_book(id)?;
            if removed == 0 {
                warning(format!("No book with id {id}."));
            } else {
                success(format!("Book #{id} has been deleted."));
            }
        }
        Commands::Clean { yes } => {
            if !yes && !ask_confirmation("Delete ALL books? The table is kept.") {
                info("Operation cancelled.");
                return Ok(());
            }

            let removed = open_repository(cfg)?.clean_book_table()?;
            success(format!("{removed} books deleted."));
        }
        Commands::Drop { yes } => {
            if !yes && !ask_confirmation("Drop the books table? This action is irreversible.") {
                info("Operation cancelled.");
                return Ok(());
            }

            let repo = open_repository(cfg)?;
            repo.delete_book_table()?;
            success(format!("Table '{}' dropped.", repo.table()));
        }
        _ => {}
    }
    Ok(())
}
