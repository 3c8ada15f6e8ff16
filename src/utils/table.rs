//! Table rendering utilities for CLI outputs.

use crate::models::book::{BOOK_COLUMNS, Book};
use unicode_width::UnicodeWidthStr;

pub struct Column {
    pub header: String,
    pub width: usize,
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Columns start as wide as their header and grow with the rows.
    pub fn with_headers<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = headers
            .into_iter()
            .map(|h| {
                let header = h.into();
                let width = header.width();
                Column { header, width }
            })
            .collect();
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        for (col, cell) in self.columns.iter_mut().zip(&row) {
            col.width = col.width.max(cell.width());
        }
        self.rows.push(row);
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        let headers: Vec<&str> = self.columns.iter().map(|c| c.header.as_str()).collect();
        self.render_line(&mut out, &headers);

        for row in &self.rows {
            let cells: Vec<&str> = row.iter().map(String::as_str).collect();
            self.render_line(&mut out, &cells);
        }

        out
    }

    // format! pads by char count, which misaligns wide glyphs.
    fn render_line(&self, out: &mut String, cells: &[&str]) {
        for (i, col) in self.columns.iter().enumerate() {
            let cell = cells.get(i).copied().unwrap_or("");
            out.push_str(cell);
            out.push_str(&" ".repeat(col.width.saturating_sub(cell.width()) + 1));
        }
        let trimmed = out.trim_end_matches(' ').len();
        out.truncate(trimmed);
        out.push('\n');
    }
}

/// One line per book: `id` followed by [`BOOK_COLUMNS`].
pub fn books_table(books: &[Book]) -> Table {
    let mut table = Table::with_headers(std::iter::once("id").chain(BOOK_COLUMNS));
    for book in books {
        let mut row = vec![book.id.to_string()];
        row.extend(book.data.to_record());
        table.add_row(row);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_aligned_by_display_width() {
        let mut table = Table::with_headers(["a", "b"]);
        table.add_row(vec!["日本".to_string(), "x".to_string()]);
        table.add_row(vec!["abc".to_string(), "y".to_string()]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "a    b");
        assert_eq!(lines[1], "日本 x");
        assert_eq!(lines[2], "abc  y");
    }
}
