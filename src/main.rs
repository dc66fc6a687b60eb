//! depaudit - npm dependency audit CLI
//!
//! Scans a project tree for package.json manifests, checks every declared
//! dependency against the npm registry, and writes a dated two-sheet
//! spreadsheet report into the current working directory.

use chrono::Utc;
use clap::Parser;
use colored::Colorize;
use depaudit::audit::Auditor;
use depaudit::cli::CliArgs;
use depaudit::domain::AuditSummary;
use depaudit::registry::{HttpClient, NpmRegistry};
use depaudit::report;
use std::path::Path;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Main application logic
async fn run(args: CliArgs) -> anyhow::Result<()> {
    let client = HttpClient::new()?;
    let auditor = Auditor::new(Box::new(NpmRegistry::new(client)));

    let findings = auditor.run_with_progress(&args.root, true).await?;
    let summary = AuditSummary::from_findings(&findings);

    // The report lands in the working directory, not under the scanned root.
    let path = report::write_report(&findings, Path::new("."), Utc::now().date_naive())?;

    println!("Report written: {}", path.display());
    print_summary(&summary);

    Ok(())
}

/// One-line result breakdown on stdout
fn print_summary(summary: &AuditSummary) {
    println!(
        "{} dependencies checked: {} major, {} minor, {} patch, {} up to date",
        summary.total,
        summary.major.to_string().red().bold(),
        summary.minor.to_string().yellow(),
        summary.patch.to_string().green(),
        summary.up_to_date
    );

    if summary.prerelease > 0 || summary.invalid > 0 || summary.errors > 0 {
        println!(
            "{} prerelease, {} invalid declarations, {} lookup errors",
            summary.prerelease,
            summary.invalid.to_string().dimmed(),
            summary.errors.to_string().red()
        );
    }
}
