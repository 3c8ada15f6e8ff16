use crate::db::value::SqlValue;
use crate::errors::{AppError, AppResult};
use serde::Serialize;
use std::fmt;

/// Column names in table order, `id` excluded.
pub const BOOK_COLUMNS: [&str; 7] = [
    "title", "authors", "isbn13", "pages", "year", "price", "discount",
];

/// A book as supplied for insertion (everything except the store-assigned id).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewBook {
    pub title: String,
    pub authors: String, // ⇔ books.authors (comma-joined names)
    pub isbn13: String,  // ⇔ books.isbn13 (UNIQUE)
    pub pages: i64,
    pub year: i64,
    pub price: f64,
    pub discount: Option<i64>, // ⇔ books.discount (nullable, 10..=90 by convention)
}

impl NewBook {
    /// Bound values in [`BOOK_COLUMNS`] order.
    pub fn to_params(&self) -> Vec<SqlValue> {
        vec![
            self.title.as_str().into(),
            self.authors.as_str().into(),
            self.isbn13.as_str().into(),
            self.pages.into(),
            self.year.into(),
            self.price.into(),
            self.discount.into(),
        ]
    }

    /// CSV/table cells in [`BOOK_COLUMNS`] order; a missing discount is empty.
    pub fn to_record(&self) -> [String; 7] {
        [
            self.title.clone(),
            self.authors.clone(),
            self.isbn13.clone(),
            self.pages.to_string(),
            self.year.to_string(),
            format!("{:.2}", self.price),
            self.discount.map(|d| d.to_string()).unwrap_or_default(),
        ]
    }
}

/// A stored row of the books table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub id: i64,
    #[serde(flatten)]
    pub data: NewBook,
}

impl Book {
    /// Decodes a `SELECT *` row: id followed by [`BOOK_COLUMNS`].
    pub fn from_row(row: &[SqlValue]) -> AppResult<Self> {
        if row.len() != BOOK_COLUMNS.len() + 1 {
            return Err(AppError::RowDecode(format!(
                "expected {} columns, found {}",
                BOOK_COLUMNS.len() + 1,
                row.len()
            )));
        }

        Ok(Self {
            id: row[0].as_i64()?,
            data: NewBook {
                title: row[1].as_text()?.to_string(),
                authors: row[2].as_text()?.to_string(),
                isbn13: row[3].as_text()?.to_string(),
                pages: row[4].as_i64()?,
                year: row[5].as_i64()?,
                price: row[6].as_f64()?,
                discount: row[7].as_optional_i64()?,
            },
        })
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let b = &self.data;
        write!(
            f,
            "({}, '{}', '{}', '{}', {}, {}, {:.2}, {})",
            self.id,
            b.title,
            b.authors,
            b.isbn13,
            b.pages,
            b.year,
            b.price,
            b.discount
                .map(|d| d.to_string())
                .unwrap_or_else(|| "None".to_string())
        )
    }
}
