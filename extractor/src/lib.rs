//! # Group Extractor - tally group names embedded in ticket comments
//!
//! Ticket and incident exports often record routing in free-text comment
//! fields using a small markup convention:
//!
//! ```text
//! Groups : [code]<I>Service Desk, Network Ops</I>[/code]
//! ```
//!
//! This crate pulls those names out of every comment-like column, collapses
//! casing variants and writes a sorted frequency report.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌─────────────┐   ┌─────────────┐   ┌─────────────┐   ┌─────────────┐
//! │ .xlsx/.csv  │──▶│   Parser    │──▶│  Columns    │──▶│  Extract +  │──▶│   Reports   │
//! │             │   │ (RowTable)  │   │ (merge)     │   │  Count      │   │ (.txt/.xlsx)│
//! └─────────────┘   └─────────────┘   └─────────────┘   └─────────────┘   └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use group_extractor::{run_pipeline, ExtractOptions};
//!
//! let summary = run_pipeline("incidents.xlsx", &ExtractOptions::with_keyword("Groups"))?;
//! for (name, count) in summary.counter.iter() {
//!     println!("{name}\t{count}");
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types per stage
//! - [`parser`] - Workbook and delimited-text loading
//! - [`transform`] - Column selection, extraction, counting and the pipeline
//! - [`report`] - Text and workbook writers
//! - [`logs`] - Console progress log
//! - [`logging`] - Diagnostic tracing setup

// Core modules
pub mod error;
pub mod logging;
pub mod logs;

// Loading
pub mod parser;

// Extraction
pub mod transform;

// Output
pub mod report;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{LoadError, LoadResult, PipelineError, PipelineResult, ReportError, ReportResult};

// =============================================================================
// Re-exports - Loading
// =============================================================================

pub use parser::{load_table, normalize_headers, with_default_extension, InputFormat, RowTable};

// =============================================================================
// Re-exports - Extraction
// =============================================================================

pub use transform::{
    count_table_groups,
    extract_group_counts,
    is_comment_column,
    merge_comment_columns,
    run_pipeline,
    save_reports,
    select_comment_columns,
    title_case,
    ExtractOptions,
    ExtractionSummary,
    GroupCounter,
    GroupPattern,
    TableCounts,
    DEFAULT_KEYWORD,
};

// =============================================================================
// Re-exports - Reports
// =============================================================================

pub use report::{
    render_text_report,
    write_excel_report,
    write_text_report,
    DEFAULT_EXCEL_OUTPUT,
    DEFAULT_TEXT_OUTPUT,
};
