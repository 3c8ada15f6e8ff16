use super::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::args::parse_integer;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Count { year } = cmd {
        let year = year
            .as_deref()
            .map(|y| parse_integer("year", y))
            .transpose()?;

        let repo = open_repository(cfg)?;
        let total = match year {
            Some(y) => repo.get_number_of_books_by_year(y)?,
            None => repo.get_number_of_books()?,
        };
        println!("{total}");
    }
    Ok(())
}
