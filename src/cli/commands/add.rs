use super::open_repository;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::book::NewBook;
use crate::ui::messages::success;
use crate::utils::args::{parse_integer, parse_number};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        authors,
        isbn13,
        pages,
        year,
        price,
        discount,
    } = cmd
    {
        // Parse everything before opening the database.
        let book = NewBook {
            title: title.clone(),
            authors: authors.clone(),
            isbn13: isbn13.clone(),
            pages: parse_integer("pages", pages)?,
            year: parse_integer("year", year)?,
            price: parse_number("price", price)?,
            discount: discount
                .as_deref()
                .map(|d| parse_integer("discount", d))
                .transpose()?,
        };

        let repo = open_repository(cfg)?;
        repo.insert_book(&book)?;
        success(format!("Book '{}' added.", book.title));
    }
    Ok(())
}
