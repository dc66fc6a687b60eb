//! Workbook writing
//!
//! Produces the `.xlsx` file with rust_xlsxwriter: bold headers, fixed
//! column widths, and an autofilter spanning the populated range of each
//! populated sheet. The placeholder Major Updates sheet gets neither widths
//! nor a filter, just its single row.

use crate::domain::Finding;
use crate::error::ReportError;
use crate::report::{
    all_rows, major_rows, report_file_name, ALL_SHEET_NAME, COLUMN_COUNT, COLUMN_TITLES,
    COLUMN_WIDTHS, MAJOR_SHEET_NAME, NO_MAJOR_PLACEHOLDER,
};
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use std::path::{Path, PathBuf};

/// Write the dated report for the given findings into `out_dir`
///
/// Returns the path of the written file.
pub fn write_report(
    findings: &[Finding],
    out_dir: &Path,
    date: NaiveDate,
) -> Result<PathBuf, ReportError> {
    let path = out_dir.join(report_file_name(date));

    let mut workbook =
        build_workbook(findings).map_err(|e| ReportError::workbook(&path, e))?;
    workbook
        .save(&path)
        .map_err(|e| ReportError::workbook(&path, e))?;

    Ok(path)
}

fn build_workbook(findings: &[Finding]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();

    let sheet = workbook.add_worksheet();
    sheet.set_name(ALL_SHEET_NAME)?;
    write_table(sheet, &all_rows(findings), &header_format)?;

    let sheet = workbook.add_worksheet();
    sheet.set_name(MAJOR_SHEET_NAME)?;
    let majors = major_rows(findings);
    if majors.is_empty() {
        sheet.write_string(0, 0, NO_MAJOR_PLACEHOLDER)?;
    } else {
        write_table(sheet, &majors, &header_format)?;
    }

    Ok(workbook)
}

fn write_table(
    sheet: &mut Worksheet,
    rows: &[[String; COLUMN_COUNT]],
    header_format: &Format,
) -> Result<(), XlsxError> {
    for (col, title) in COLUMN_TITLES.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *title, header_format)?;
    }

    for (index, row) in rows.iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            sheet.write_string((index + 1) as u32, col as u16, cell.as_str())?;
        }
    }

    for (col, width) in COLUMN_WIDTHS.iter().enumerate() {
        sheet.set_column_width(col as u16, *width)?;
    }

    sheet.autofilter(0, 0, rows.len() as u32, (COLUMN_COUNT - 1) as u16)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DeclaredDependency, DiffClass};
    use tempfile::TempDir;

    fn finding(name: &str, diff: DiffClass) -> Finding {
        let dep = DeclaredDependency::new("package.json", name, "^1.0.0");
        Finding::resolved(&dep, "1.0.0", "2.0.0", diff)
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    #[test]
    fn test_write_report_creates_dated_file() {
        let dir = TempDir::new().unwrap();
        let findings = vec![
            finding("left-pad", DiffClass::Major),
            finding("lodash", DiffClass::Minor),
        ];

        let path = write_report(&findings, dir.path(), test_date()).unwrap();
        assert_eq!(
            path,
            dir.path().join("dependency-report-2026-08-06.xlsx")
        );
        assert!(path.exists());
    }

    #[test]
    fn test_write_report_no_findings() {
        let dir = TempDir::new().unwrap();
        let path = write_report(&[], dir.path(), test_date()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_report_without_majors_uses_placeholder_sheet() {
        let dir = TempDir::new().unwrap();
        let findings = vec![finding("lodash", DiffClass::Patch)];

        // The placeholder path must still produce a two-sheet workbook.
        let path = write_report(&findings, dir.path(), test_date()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_write_report_to_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let result = write_report(&[], &missing, test_date());
        assert!(matches!(result, Err(ReportError::Workbook { .. })));
    }

    #[test]
    fn test_same_day_runs_overwrite() {
        let dir = TempDir::new().unwrap();
        let first = write_report(&[], dir.path(), test_date()).unwrap();
        let second =
            write_report(&[finding("lodash", DiffClass::Major)], dir.path(), test_date()).unwrap();
        assert_eq!(first, second);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }
}
