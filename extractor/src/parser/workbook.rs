//! Workbook loading. Only the first worksheet is read; its first row is the header.

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::path::Path;

use super::{non_blank, normalize_headers, RowTable};
use crate::error::{LoadError, LoadResult};

/// Read the first worksheet of an `.xlsx` file.
pub fn parse_workbook_file<P: AsRef<Path>>(path: P) -> LoadResult<RowTable> {
    let mut workbook: Xlsx<_> = open_workbook(path.as_ref())?;

    if let Some(name) = workbook.sheet_names().first() {
        tracing::debug!(sheet = %name, "reading first worksheet");
    }

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(LoadError::NoWorksheet)??;

    range_to_table(&range)
}

/// Convert a cell range into a [`RowTable`].
pub fn range_to_table(range: &Range<Data>) -> LoadResult<RowTable> {
    let mut rows = range.rows();

    let header_row = rows.next().ok_or(LoadError::EmptyFile)?;
    let headers = normalize_headers(header_row.iter().map(cell_text));

    let rows = rows
        .filter(|row| row.iter().any(|cell| !matches!(cell, Data::Empty)))
        .map(|row| row.iter().map(|cell| non_blank(cell_text(cell))).collect())
        .collect();

    Ok(RowTable::new(headers, rows))
}

/// Textual form of a cell. Empty cells become the empty string.
pub fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        other => other.to_string(),
    }
}
