use std::fs;
use std::path::Path;

use super::{COUNT_HEADER, NAME_HEADER};
use crate::error::ReportResult;
use crate::logs::log_success;
use crate::transform::GroupCounter;

/// Render the tab-separated table: a header line, then one line per name.
pub fn render_text_report(counter: &GroupCounter) -> String {
    let mut out = format!("{}\t{}\n", NAME_HEADER, COUNT_HEADER);
    for (name, count) in counter.iter() {
        out.push_str(&format!("{}\t{}\n", name, count));
    }
    out
}

/// Write the tab-separated report to `path`, replacing any existing file.
pub fn write_text_report<P: AsRef<Path>>(counter: &GroupCounter, path: P) -> ReportResult<()> {
    let path = path.as_ref();
    fs::write(path, render_text_report(counter))?;
    log_success(format!("Text output saved successfully in '{}'.", path.display()));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_sorted_with_header() {
        let counter = GroupCounter::from_tokens(["blue team", "Red Team", "Blue Team", "amber"]);
        let text = render_text_report(&counter);
        assert_eq!(
            text,
            "Group name\tNumber of occurrences\nAmber\t1\nBlue Team\t2\nRed Team\t1\n"
        );
    }

    #[test]
    fn test_render_empty_counter_is_header_only() {
        let text = render_text_report(&GroupCounter::new());
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_write_overwrites_and_is_idempotent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("group_counts.txt");
        fs::write(&path, "stale content that is longer than the report\n".repeat(10)).unwrap();

        let counter = GroupCounter::from_tokens(["Ops", "Desk"]);
        write_text_report(&counter, &path).unwrap();
        let first = fs::read(&path).unwrap();
        write_text_report(&counter, &path).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            String::from_utf8(first).unwrap(),
            "Group name\tNumber of occurrences\nDesk\t1\nOps\t1\n"
        );
    }

    #[test]
    fn test_unwritable_destination() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("group_counts.txt");
        let err = write_text_report(&GroupCounter::from_tokens(["Ops"]), &path).unwrap_err();
        assert!(matches!(err, crate::error::ReportError::Io(_)));
    }
}
