pub mod book;

pub use book::{BOOK_COLUMNS, Book, NewBook};
