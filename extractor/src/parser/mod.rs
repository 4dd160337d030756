//! Tabular loading for `.xlsx` workbooks and `.csv` exports.
//!
//! Both formats land in the same [`RowTable`]: an ordered header list plus
//! one row of optional cells per record. Blank cells are stored as `None`.
//!
//! # Example
//! ```ignore
//! let table = load_table("incidents.xlsx")?;
//! println!("{} rows, columns: {}", table.len(), table.headers().join(", "));
//! ```

pub mod delimited;
pub mod workbook;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{LoadError, LoadResult};

pub use delimited::{decode_content, detect_delimiter, detect_encoding, parse_csv_bytes, parse_csv_file};
pub use workbook::parse_workbook_file;

/// Supported input formats, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Xlsx,
    Csv,
}

impl InputFormat {
    /// Detect the format from the path extension (ASCII case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("xlsx") {
            Some(InputFormat::Xlsx)
        } else if ext.eq_ignore_ascii_case("csv") {
            Some(InputFormat::Csv)
        } else {
            None
        }
    }
}

/// Rows loaded from a spreadsheet, immutable once built
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowTable {
    headers: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl RowTable {
    /// Build a table. Rows are padded or truncated to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell value, `None` when blank or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }
}

/// Append `.xlsx` to a path typed without any extension.
///
/// Paths that already carry an extension are returned unchanged, so a wrong
/// extension still surfaces as [`LoadError::UnsupportedFormat`].
pub fn with_default_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() || path.as_os_str().is_empty() {
        return path;
    }
    let mut raw = path.into_os_string();
    raw.push(".xlsx");
    PathBuf::from(raw)
}

/// Load a spreadsheet into a [`RowTable`], dispatching on the extension.
///
/// Fails with [`LoadError::UnsupportedFormat`] before touching the file when
/// the extension is neither `.xlsx` nor `.csv`.
pub fn load_table<P: AsRef<Path>>(path: P) -> LoadResult<RowTable> {
    let path = path.as_ref();
    let format = InputFormat::from_path(path)
        .ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;

    tracing::debug!(path = %path.display(), ?format, "loading table");

    let table = match format {
        InputFormat::Xlsx => parse_workbook_file(path)?,
        InputFormat::Csv => parse_csv_file(path)?,
    };

    tracing::debug!(rows = table.len(), columns = table.headers().len(), "table loaded");
    Ok(table)
}

/// Make every header addressable: blank names become `Unnamed: <index>` and
/// repeated names get `.1`, `.2`, ... suffixes.
pub fn normalize_headers<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut headers = Vec::new();

    for (idx, name) in raw.into_iter().enumerate() {
        let name = name.as_ref().trim();
        let base = if name.is_empty() {
            format!("Unnamed: {}", idx)
        } else {
            name.to_string()
        };

        let mut candidate = base.clone();
        let mut suffix = 1;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{}.{}", base, suffix);
            suffix += 1;
        }
        headers.push(candidate);
    }

    headers
}

/// Blank cells are treated as missing.
pub(crate) fn non_blank(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
