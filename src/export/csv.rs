use crate::db::value::SqlRow;
use crate::errors::AppResult;
use crate::models::book::BOOK_COLUMNS;
use csv::Writer;
use std::path::Path;

pub const CSV_HEADER: [&str; 7] = BOOK_COLUMNS;

/// Writes the header and one record per row to `path`, truncating any
/// previous content. NULL cells are written as empty fields.
pub fn write_books_csv(path: &Path, rows: &[SqlRow]) -> AppResult<usize> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(CSV_HEADER)?;

    for row in rows {
        wtr.write_record(row.iter().map(|value| value.to_string()))?;
    }

    wtr.flush()?;
    Ok(rows.len())
}
