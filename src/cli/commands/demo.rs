use super::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::args::parse_count;

const THICK_BOOK_PAGES: f64 = 900.0;

/// Create the table, bulk insert generated books, print the ones with more
/// than 900 pages and the total count.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Demo { count } = cmd {
        let count = parse_count("count", count)?;
        let repo = open_repository(cfg)?;

        repo.create_table()?;
        repo.init_books(count)?;

        for book in repo.get_book_by_page_greater(THICK_BOOK_PAGES)? {
            println!("{book}");
        }

        println!("{}", repo.get_number_of_books()?);
    }
    Ok(())
}
