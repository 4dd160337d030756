use rust_xlsxwriter::{Format, Workbook};
use std::path::Path;

use super::{COUNT_HEADER, NAME_HEADER};
use crate::error::ReportResult;
use crate::logs::log_success;
use crate::transform::GroupCounter;

/// Write the counts as a two-column workbook with a bold header row.
pub fn write_excel_report<P: AsRef<Path>>(counter: &GroupCounter, path: P) -> ReportResult<()> {
    let path = path.as_ref();
    let header_fmt = Format::new().set_bold();

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Sheet1")?;

    sheet.write_string_with_format(0, 0, NAME_HEADER, &header_fmt)?;
    sheet.write_string_with_format(0, 1, COUNT_HEADER, &header_fmt)?;

    let mut name_width = NAME_HEADER.len();
    for (row, (name, count)) in (1u32..).zip(counter.iter()) {
        sheet.write_string(row, 0, name)?;
        sheet.write_number(row, 1, count as f64)?;
        name_width = name_width.max(name.chars().count());
    }

    sheet.set_column_width(0, name_width as f64 + 2.0)?;
    sheet.set_column_width(1, COUNT_HEADER.len() as f64 + 2.0)?;

    workbook.save(path)?;
    log_success(format!("Excel output saved successfully in '{}'.", path.display()));
    Ok(())
}
