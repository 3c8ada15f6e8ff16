//! Book table access.
//!
//! Every public method is one unit of work: it opens its own
//! [`ScopedConnection`] scope, runs its statement(s) and is committed or
//! rolled back before returning.
//!
//! Values always travel as bound parameters. The table name is the only
//! piece of text spliced into SQL and is checked to be a plain identifier
//! when the repository is built.

use crate::db::{Cursor, Driver, ScopedConnection, SqliteConfig, SqliteDriver};
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_books_csv;
use crate::generator::BookGenerator;
use crate::models::book::{BOOK_COLUMNS, Book, NewBook};
use log::{debug, info};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};

pub const DEFAULT_TABLE: &str = "books";
pub const DEFAULT_EXPORT_FILE: &str = "output.csv";

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid identifier regex"));

pub struct BookRepository<D: Driver> {
    scoped: ScopedConnection<D>,
    table: String,
    export_path: PathBuf,
}

impl BookRepository<SqliteDriver> {
    /// SQLite-backed repository with the default table and export file.
    pub fn sqlite(database: impl AsRef<Path>) -> AppResult<Self> {
        Self::new(
            ScopedConnection::new(SqliteDriver, SqliteConfig::new(database)),
            DEFAULT_TABLE,
            DEFAULT_EXPORT_FILE,
        )
    }
}

impl<D: Driver> BookRepository<D> {
    pub fn new(
        scoped: ScopedConnection<D>,
        table: impl Into<String>,
        export_path: impl Into<PathBuf>,
    ) -> AppResult<Self> {
        let table = table.into();
        if !IDENTIFIER.is_match(&table) {
            return Err(AppError::invalid_argument(
                "table",
                format!("must be a plain SQL identifier, got `{table}`"),
            ));
        }

        Ok(Self {
            scoped,
            table,
            export_path: export_path.into(),
        })
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    pub fn create_table(&self) -> AppResult<()> {
        let sql = format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                authors TEXT NOT NULL,
                isbn13 TEXT UNIQUE NOT NULL,
                pages INTEGER NOT NULL,
                year INTEGER NOT NULL,
                price REAL NOT NULL,
                discount INTEGER
            )",
            self.table
        );

        self.scoped.run(|cur| cur.execute(&sql, &[]))?;
        debug!("event=create_table module=repository status=ok table={}", self.table);
        Ok(())
    }

    pub fn insert_book(&self, book: &NewBook) -> AppResult<()> {
        let sql = self.insert_sql();
        ensure_finite("price", book.price)?;

        self.scoped.run(|cur| cur.execute(&sql, &book.to_params()))
    }

    /// A fresh producer of `count` synthetic books.
    pub fn book_generator(&self, count: usize) -> BookGenerator {
        BookGenerator::new(count)
    }

    /// Inserts `count` generated books in a single unit of work.
    pub fn init_books(&self, count: usize) -> AppResult<usize> {
        let sql = self.insert_sql();
        let mut params = self.book_generator(count).map(|book| book.to_params());

        let inserted = self.scoped.run(|cur| cur.execute_many(&sql, &mut params))?;
        info!(
            "event=init_books module=repository status=ok table={} rows={}",
            self.table, inserted
        );
        Ok(inserted)
    }

    /// Books published in `year`, in storage order.
    pub fn get_book_by_year(&self, year: i64) -> AppResult<std::vec::IntoIter<Book>> {
        let sql = format!("SELECT * FROM {} WHERE year = ?1", self.table);
        let books = self.select_books(&sql, &[year.into()])?;
        Ok(books.into_iter())
    }

    /// Books strictly cheaper than `price`, oldest first.
    pub fn get_book_by_price_less(&self, price: f64) -> AppResult<Vec<Book>> {
        ensure_finite("price", price)?;
        let sql = format!(
            "SELECT * FROM {} WHERE price < ?1 ORDER BY year",
            self.table
        );
        self.select_books(&sql, &[price.into()])
    }

    /// Books with strictly more than `pages` pages, oldest first.
    pub fn get_book_by_page_greater(&self, pages: f64) -> AppResult<Vec<Book>> {
        ensure_finite("pages", pages)?;
        let sql = format!(
            "SELECT * FROM {} WHERE pages > ?1 ORDER BY year",
            self.table
        );
        self.select_books(&sql, &[pages.into()])
    }

    pub fn get_number_of_books(&self) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.table);
        self.scoped.run(|cur| {
            cur.execute(&sql, &[])?;
            scalar(cur)
        })
    }

    pub fn get_number_of_books_by_year(&self, year: i64) -> AppResult<i64> {
        let sql = format!("SELECT COUNT(*) FROM {} WHERE year = ?1", self.table);
        self.scoped.run(|cur| {
            cur.execute(&sql, &[year.into()])?;
            scalar(cur)
        })
    }

    /// Writes up to `limit` books to the export file, replacing its contents.
    /// A negative `limit` exports every book. Returns the number of data rows
    /// written.
    pub fn export_books_to_csv(&self, limit: i64) -> AppResult<usize> {
        let sql = format!(
            "SELECT {} FROM {} LIMIT ?1",
            BOOK_COLUMNS.join(", "),
            self.table
        );

        let written = self.scoped.run(|cur| {
            cur.execute(&sql, &[limit.into()])?;
            let rows = cur.fetch_all()?;
            write_books_csv(&self.export_path, &rows)
        })?;

        info!(
            "event=export_csv module=repository status=ok path={} rows={}",
            self.export_path.display(),
            written
        );
        Ok(written)
    }

    /// Returns the number of rows removed (0 or 1).
    pub fn delete_book(&self, id: i64) -> AppResult<usize> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", self.table);
        self.scoped.run(|cur| {
            cur.execute(&sql, &[id.into()])?;
            Ok(cur.rowcount())
        })
    }

    /// Removes every row but keeps the table.
    pub fn clean_book_table(&self) -> AppResult<usize> {
        let sql = format!("DELETE FROM {}", self.table);
        self.scoped.run(|cur| {
            cur.execute(&sql, &[])?;
            Ok(cur.rowcount())
        })
    }

    pub fn delete_book_table(&self) -> AppResult<()> {
        let sql = format!("DROP TABLE {}", self.table);
        self.scoped.run(|cur| cur.execute(&sql, &[]))?;
        info!("event=drop_table module=repository status=ok table={}", self.table);
        Ok(())
    }

    fn insert_sql(&self) -> String {
        let placeholders = (1..=BOOK_COLUMNS.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            self.table,
            BOOK_COLUMNS.join(", "),
            placeholders
        )
    }

    fn select_books(&self, sql: &str, params: &[crate::db::SqlValue]) -> AppResult<Vec<Book>> {
        self.scoped.run(|cur| {
            cur.execute(sql, params)?;
            cur.fetch_all()?
                .into_iter()
                .map(|row| Book::from_row(&row))
                .collect()
        })
    }
}

fn scalar(cur: &mut dyn Cursor) -> AppResult<i64> {
    match cur.fetch_one()? {
        Some(row) => row
            .first()
            .ok_or_else(|| AppError::RowDecode("empty result row".to_string()))?
            .as_i64(),
        None => Err(AppError::RowDecode("missing result row".to_string())),
    }
}

fn ensure_finite(name: &str, value: f64) -> AppResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(AppError::invalid_argument(
            name,
            format!("must be a finite number, got {value}"),
        ))
    }
}
