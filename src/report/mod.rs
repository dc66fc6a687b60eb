//! Report generation
//!
//! Assembles findings into a two-sheet spreadsheet: every finding on the
//! All Dependencies sheet, the major subset (or a placeholder) on the
//! Major Updates sheet. Layout helpers live here as plain functions over
//! findings; the workbook writing lives in `workbook`.

mod workbook;

pub use workbook::write_report;

use crate::domain::Finding;
use chrono::NaiveDate;

/// Number of report columns
pub const COLUMN_COUNT: usize = 8;

/// Column headers, in sheet order
pub const COLUMN_TITLES: [&str; COLUMN_COUNT] = [
    "Manifest",
    "Package",
    "Current Version",
    "Latest Version",
    "Diff",
    "Description",
    "Homepage",
    "Repository",
];

/// Fixed column widths in character units, matching the column order
pub const COLUMN_WIDTHS: [f64; COLUMN_COUNT] = [30.0, 20.0, 15.0, 15.0, 10.0, 50.0, 30.0, 30.0];

/// Name of the sheet listing every finding
pub const ALL_SHEET_NAME: &str = "All Dependencies";

/// Name of the sheet listing only major-gap findings
pub const MAJOR_SHEET_NAME: &str = "Major Updates";

/// Placeholder row content when there are no major updates
pub const NO_MAJOR_PLACEHOLDER: &str = "No major updates found";

/// Report file name prefix; the run date and extension complete it
pub const REPORT_FILE_PREFIX: &str = "dependency-report";

/// File name for a report generated on the given date
///
/// Repeated runs on the same day produce the same name and overwrite each
/// other, by design.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("{}-{}.xlsx", REPORT_FILE_PREFIX, date.format("%Y-%m-%d"))
}

/// One sheet row for a finding
pub fn finding_row(finding: &Finding) -> [String; COLUMN_COUNT] {
    [
        finding.manifest.display().to_string(),
        finding.package.clone(),
        finding.current_version.clone(),
        finding.latest_version.clone(),
        finding.diff.label().to_string(),
        finding.description.clone(),
        finding.homepage.clone(),
        finding.repository.clone(),
    ]
}

/// Rows for the All Dependencies sheet, in finding order
pub fn all_rows(findings: &[Finding]) -> Vec<[String; COLUMN_COUNT]> {
    findings.iter().map(finding_row).collect()
}

/// Rows for the Major Updates sheet: the major subset, in finding order
pub fn major_rows(findings: &[Finding]) -> Vec<[String; COLUMN_COUNT]> {
    findings
        .iter()
        .filter(|f| f.is_major())
        .map(finding_row)
        .collect()
}
