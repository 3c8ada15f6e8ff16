// src/export/mod.rs

pub mod csv;

pub use self::csv::{CSV_HEADER, write_books_csv};
