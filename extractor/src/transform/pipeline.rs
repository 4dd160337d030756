//! High-level pipeline: spreadsheet in, group counts and reports out.
//!
//! # Example
//!
//! ```rust,ignore
//! use group_extractor::{run_pipeline, ExtractOptions};
//!
//! let summary = run_pipeline("incidents.xlsx", &ExtractOptions::default())?;
//! println!("{} distinct groups", summary.counter.len());
//! ```

use std::path::{Path, PathBuf};

use super::columns::{merge_comment_columns, select_comment_columns};
use super::count::GroupCounter;
use super::extract::{GroupPattern, DEFAULT_KEYWORD};
use crate::error::PipelineResult;
use crate::logs::{log_info, log_info_indent, log_success, log_warning};
use crate::parser::{load_table, RowTable};
use crate::report::{write_excel_report, write_text_report, DEFAULT_EXCEL_OUTPUT, DEFAULT_TEXT_OUTPUT};

/// Options for one extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Label preceding the group marker
    pub keyword: String,

    /// Tab-separated report destination
    pub text_output: PathBuf,

    /// Workbook report destination
    pub excel_output: PathBuf,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            keyword: DEFAULT_KEYWORD.to_string(),
            text_output: PathBuf::from(DEFAULT_TEXT_OUTPUT),
            excel_output: PathBuf::from(DEFAULT_EXCEL_OUTPUT),
        }
    }
}

impl ExtractOptions {
    /// Default options with the given keyword; blank means `Groups`.
    pub fn with_keyword(keyword: &str) -> Self {
        let keyword = keyword.trim();
        Self {
            keyword: if keyword.is_empty() { DEFAULT_KEYWORD.to_string() } else { keyword.to_string() },
            ..Self::default()
        }
    }
}

/// Counts harvested from one table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableCounts {
    /// Comment-like columns that were merged
    pub columns: Vec<String>,

    /// Names extracted before normalization
    pub token_count: usize,

    pub counter: GroupCounter,
}

/// Result of a full run
#[derive(Debug, Clone)]
pub struct ExtractionSummary {
    pub row_count: usize,
    pub columns: Vec<String>,
    pub token_count: usize,
    pub counter: GroupCounter,

    /// Reports written, empty when nothing matched
    pub reports: Vec<PathBuf>,
}

impl ExtractionSummary {
    pub fn has_matches(&self) -> bool {
        !self.counter.is_empty()
    }
}

/// `1 row`, `2 rows`
fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}

/// Select comment columns, merge them per row and count every group marker.
pub fn count_table_groups(table: &RowTable, keyword: &str) -> PipelineResult<TableCounts> {
    let columns = select_comment_columns(table.headers())?;
    let pattern = GroupPattern::new(keyword)?;

    let blobs = merge_comment_columns(table, &columns);
    let mut counter = GroupCounter::new();
    let mut token_count = 0;

    for (row, blob) in blobs.iter().enumerate() {
        for name in pattern.extract(blob) {
            tracing::trace!(row, name, "group marker");
            counter.add(name);
            token_count += 1;
        }
    }

    Ok(TableCounts {
        columns,
        token_count,
        counter,
    })
}

/// Load a spreadsheet and count the groups named under `keyword`.
///
/// An empty counter means nothing matched; that is not an error.
pub fn extract_group_counts<P: AsRef<Path>>(path: P, keyword: &str) -> PipelineResult<GroupCounter> {
    let table = load_table(path)?;
    Ok(count_table_groups(&table, keyword)?.counter)
}

/// Write the text report, then the workbook report.
///
/// Reports are written one after the other; a failure in the second leaves
/// the first in place.
pub fn save_reports(counter: &GroupCounter, options: &ExtractOptions) -> PipelineResult<Vec<PathBuf>> {
    write_text_report(counter, &options.text_output)?;
    write_excel_report(counter, &options.excel_output)?;
    Ok(vec![options.text_output.clone(), options.excel_output.clone()])
}

/// Run the whole pipeline on one input file.
pub fn run_pipeline<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> PipelineResult<ExtractionSummary> {
    let path = path.as_ref();

    log_info(format!("📖 Reading {}...", path.display()));
    let table = load_table(path)?;
    log_success(format!("Read {}", plural(table.len(), "row")));

    let counts = count_table_groups(&table, &options.keyword)?;
    log_info(format!("📋 Using {} comment column(s):", counts.columns.len()));
    for (i, col) in counts.columns.iter().enumerate() {
        log_info_indent(format!("[{:2}] {}", i + 1, col), 1);
    }

    let mut summary = ExtractionSummary {
        row_count: table.len(),
        columns: counts.columns,
        token_count: counts.token_count,
        counter: counts.counter,
        reports: Vec::new(),
    };

    if !summary.has_matches() {
        log_warning(format!("No '{}' markers found", options.keyword));
        return Ok(summary);
    }

    log_success(format!(
        "Found {} across {}",
        plural(summary.token_count, "group mention"),
        plural(summary.counter.len(), "distinct group")
    ));

    summary.reports = save_reports(&summary.counter, options)?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{LoadError, PipelineError};
    use std::fs;
    use tempfile::tempdir;

    fn options_in(dir: &Path, keyword: &str) -> ExtractOptions {
        ExtractOptions {
            text_output: dir.join("group_counts.txt"),
            excel_output: dir.join("group_counts.xlsx"),
            ..ExtractOptions::with_keyword(keyword)
        }
    }

    #[test]
    fn test_default_options() {
        let opts = ExtractOptions::default();
        assert_eq!(opts.keyword, "Groups");
        assert_eq!(opts.text_output, PathBuf::from("group_counts.txt"));
        assert_eq!(opts.excel_output, PathBuf::from("group_counts.xlsx"));
    }

    #[test]
    fn test_blank_keyword_defaults() {
        assert_eq!(ExtractOptions::with_keyword("   ").keyword, "Groups");
        assert_eq!(ExtractOptions::with_keyword(" Teams ").keyword, "Teams");
    }

    #[test]
    fn test_plural_counts() {
        assert_eq!(plural(1, "row"), "1 row");
        assert_eq!(plural(0, "row"), "0 rows");
        assert_eq!(plural(2, "group mention"), "2 group mentions");
    }

    #[test]
    fn test_count_table_groups() {
        let table = RowTable::new(
            vec!["Number".into(), "Comments".into(), "Work notes".into()],
            vec![
                vec![
                    Some("INC1".into()),
                    Some("Groups : [code]<I>Red Team, blue team</I>[/code]".into()),
                    None,
                ],
                vec![Some("INC2".into()), None, Some("nothing to see".into())],
            ],
        );

        let counts = count_table_groups(&table, "Groups").unwrap();
        assert_eq!(counts.columns, vec!["Comments", "Work notes"]);
        assert_eq!(counts.token_count, 2);
        assert_eq!(counts.counter.total(), counts.token_count);
        let pairs: Vec<_> = counts.counter.iter().collect();
        assert_eq!(pairs, vec![("Blue Team", 1), ("Red Team", 1)]);
    }

    #[test]
    fn test_marker_split_across_columns() {
        // Cells are joined with a space, so a marker spread over two columns still matches.
        let table = RowTable::new(
            vec!["Comments".into(), "Work notes".into()],
            vec![vec![
                Some("Groups :".into()),
                Some("[code]<I>Ops</I>[/code]".into()),
            ]],
        );
        let counts = count_table_groups(&table, "Groups").unwrap();
        assert_eq!(counts.counter.get("Ops"), 1);
    }

    #[test]
    fn test_missing_comment_column() {
        let table = RowTable::new(
            vec!["Short Description".into(), "Resolution Notes".into()],
            vec![vec![Some("Groups : [code]<I>Ops</I>[/code]".into()), None]],
        );
        let err = count_table_groups(&table, "Groups").unwrap_err();
        assert!(matches!(err, PipelineError::MissingColumn { .. }));
    }

    #[test]
    fn test_end_to_end_csv() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("incidents.csv");
        fs::write(
            &input,
            "Number,Additional comments,Work notes\n\
             INC1,\"Groups : [code]<I>Red Team, blue team</I>[/code]\",\n\
             INC2,no markup,still nothing\n",
        )
        .unwrap();

        let options = options_in(dir.path(), "");
        let summary = run_pipeline(&input, &options).unwrap();

        assert_eq!(summary.row_count, 2);
        assert_eq!(summary.token_count, 2);
        assert_eq!(summary.counter.len(), 2);
        assert_eq!(summary.reports.len(), 2);

        let text = fs::read_to_string(&options.text_output).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["Group name\tNumber of occurrences", "Blue Team\t1", "Red Team\t1"]
        );
        assert!(options.excel_output.exists());
    }

    #[test]
    fn test_no_matches_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("incidents.csv");
        fs::write(&input, "Number,Comments\nINC1,Teams : [code]<I>Ops</I>[/code]\n").unwrap();

        let options = options_in(dir.path(), "Groups");
        let summary = run_pipeline(&input, &options).unwrap();

        assert!(!summary.has_matches());
        assert!(summary.reports.is_empty());
        assert!(!options.text_output.exists());
        assert!(!options.excel_output.exists());
    }

    #[test]
    fn test_custom_keyword_end_to_end() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("incidents.csv");
        fs::write(
            &input,
            "Number,Comments\nINC1,Teams : [code]<I>ops, OPS</I>[/code]\n",
        )
        .unwrap();

        let counter = extract_group_counts(&input, "teams").unwrap();
        assert_eq!(counter.get("Ops"), 2);
    }

    #[test]
    fn test_unsupported_input() {
        let dir = tempdir().unwrap();
        let options = options_in(dir.path(), "Groups");
        let err = run_pipeline(dir.path().join("incidents.txt"), &options).unwrap_err();
        assert!(matches!(err, PipelineError::Load(LoadError::UnsupportedFormat(_))));
        assert!(!options.text_output.exists());
    }
}
