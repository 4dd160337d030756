//! Comment column selection and per-row text merging.

use crate::error::{PipelineError, PipelineResult};
use crate::parser::RowTable;

/// Substrings that mark a column as comment-like (matched case-insensitively).
pub const COMMENT_COLUMN_MARKERS: [&str; 2] = ["comment", "work"];

/// Whether a column name looks like it holds comments or work notes.
pub fn is_comment_column(name: &str) -> bool {
    let lower = name.to_lowercase();
    COMMENT_COLUMN_MARKERS.iter().any(|marker| lower.contains(marker))
}

/// Select the comment-like columns, keeping source order.
pub fn select_comment_columns<S: AsRef<str>>(headers: &[S]) -> PipelineResult<Vec<String>> {
    let selected: Vec<String> = headers
        .iter()
        .map(|h| h.as_ref())
        .filter(|name| is_comment_column(name))
        .map(String::from)
        .collect();

    if selected.is_empty() {
        return Err(PipelineError::MissingColumn {
            columns: headers.iter().map(|h| h.as_ref().to_string()).collect(),
        });
    }

    Ok(selected)
}

/// Join the selected columns of every row with a single space.
///
/// Missing cells contribute an empty string, so separators are kept even
/// for blank columns. Unknown column names behave like all-blank columns.
pub fn merge_comment_columns<S: AsRef<str>>(table: &RowTable, columns: &[S]) -> Vec<String> {
    let indices: Vec<Option<usize>> = columns
        .iter()
        .map(|name| table.column_index(name.as_ref()))
        .collect();

    (0..table.len())
        .map(|row| {
            indices
                .iter()
                .map(|idx| idx.and_then(|col| table.cell(row, col)).unwrap_or(""))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
