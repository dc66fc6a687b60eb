//! CLI argument parsing module for depaudit

use clap::Parser;
use std::path::PathBuf;

/// Audit npm dependency manifests and report outdated packages
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depaudit",
    version,
    about = "Audits package.json manifests and writes a dated spreadsheet report"
)]
pub struct CliArgs {
    /// Root directory to scan for package.json files (default: current directory)
    #[arg(default_value = ".")]
    pub root: PathBuf,
}
