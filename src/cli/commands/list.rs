use super::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::book::Book;
use crate::ui::messages::{header, info};
use crate::utils::args::{parse_integer, parse_number};
use crate::utils::table::books_table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        year,
        price_less,
        pages_greater,
        json,
    } = cmd
    {
        let (title, books): (String, Vec<Book>) = if let Some(y) = year {
            let y = parse_integer("year", y)?;
            let repo = open_repository(cfg)?;
            (format!("Books from {y}"), repo.get_book_by_year(y)?.collect())
        } else if let Some(p) = price_less {
            let p = parse_number("price", p)?;
            let repo = open_repository(cfg)?;
            (
                format!("Books cheaper than {p}"),
                repo.get_book_by_price_less(p)?,
            )
        } else if let Some(n) = pages_greater {
            let n = parse_number("pages", n)?;
            let repo = open_repository(cfg)?;
            (
                format!("Books with more than {n} pages"),
                repo.get_book_by_page_greater(n)?,
            )
        } else {
            return Ok(());
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&books)?);
            return Ok(());
        }

        if books.is_empty() {
            info("No books found.");
            return Ok(());
        }

        header(title);
        print!("{}", books_table(&books).render());
    }
    Ok(())
}
