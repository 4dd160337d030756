//! Report writers for a finished [`GroupCounter`](crate::GroupCounter).
//!
//! Both writers emit the same sorted `(name, count)` pairs under the same
//! header labels and overwrite any existing file.

pub mod excel;
pub mod text;

pub use excel::write_excel_report;
pub use text::{render_text_report, write_text_report};

/// Header label of the name column.
pub const NAME_HEADER: &str = "Group name";

/// Header label of the count column.
pub const COUNT_HEADER: &str = "Number of occurrences";

/// Default path of the tab-separated report.
pub const DEFAULT_TEXT_OUTPUT: &str = "group_counts.txt";

/// Default path of the workbook report.
pub const DEFAULT_EXCEL_OUTPUT: &str = "group_counts.xlsx";
