//! Extraction stages.
//!
//! - Columns: comment column selection and per-row text merging
//! - Extract: keyword-anchored group marker matching
//! - Count: title-case normalization and tallying
//! - Pipeline: load, extract, count and report in one call

pub mod columns;
pub mod count;
pub mod extract;
pub mod pipeline;

pub use columns::{is_comment_column, merge_comment_columns, select_comment_columns, COMMENT_COLUMN_MARKERS};
pub use count::{title_case, GroupCounter};
pub use extract::{GroupPattern, DEFAULT_KEYWORD};
pub use pipeline::*;
