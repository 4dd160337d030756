//! Error types for the group extraction pipeline.
//!
//! - [`LoadError`] - Reading the input spreadsheet
//! - [`ReportError`] - Writing the text and workbook reports
//! - [`PipelineError`] - Top-level orchestration errors
//!
//! Error conversion is automatic via `From` implementations,
//! allowing `?` to work across error boundaries.

use std::path::PathBuf;
use thiserror::Error;

// =============================================================================
// Loading Errors
// =============================================================================

/// Errors while loading the input table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Extension is neither `.xlsx` nor `.csv`.
    #[error("Unsupported file format '{}'. Please use .xlsx or .csv", .0.display())]
    UnsupportedFormat(PathBuf),

    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text.
    #[error("Invalid CSV format: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed workbook.
    #[error("Invalid workbook: {0}")]
    Workbook(#[from] calamine::XlsxError),

    /// Workbook has no worksheet to read.
    #[error("Workbook contains no worksheet")]
    NoWorksheet,

    /// No header row.
    #[error("Input file is empty")]
    EmptyFile,
}

// =============================================================================
// Report Errors
// =============================================================================

/// Errors while writing a report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Destination could not be written.
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),

    /// Workbook serialization failed.
    #[error("Failed to write workbook: {0}")]
    Excel(#[from] rust_xlsxwriter::XlsxError),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Top-level pipeline errors.
///
/// This is the error type returned by [`crate::run_pipeline`]. It wraps the
/// stage errors and adds the column heuristic failure.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Loading error.
    #[error("{0}")]
    Load(#[from] LoadError),

    /// Report error.
    #[error("{0}")]
    Report(#[from] ReportError),

    /// No column name contains "comment" or "work".
    #[error("No 'comments' or 'worknotes' column found in the file (columns: {})", .columns.join(", "))]
    MissingColumn { columns: Vec<String> },

    /// Keyword produced an unusable pattern.
    #[error("Invalid search keyword: {0}")]
    InvalidKeyword(#[from] regex::Error),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Result type for report operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
