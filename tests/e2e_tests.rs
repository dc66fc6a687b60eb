//! End-to-end tests for the depaudit binary
//!
//! These tests run the compiled binary against temp directories that need no
//! network access: empty trees, invalid declarations (which skip the registry
//! entirely), and fatal inputs.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn depaudit() -> Command {
    Command::cargo_bin("depaudit").expect("binary exists")
}

fn report_files(dir: &TempDir) -> Vec<String> {
    fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("dependency-report-") && name.ends_with(".xlsx"))
        .collect()
}

#[test]
fn test_empty_root_writes_empty_report() {
    let dir = TempDir::new().unwrap();

    depaudit()
        .current_dir(dir.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written: "))
        .stdout(predicate::str::contains("0 dependencies checked"));

    assert_eq!(report_files(&dir).len(), 1);
}

#[test]
fn test_root_defaults_to_current_directory() {
    let dir = TempDir::new().unwrap();

    depaudit().current_dir(dir.path()).assert().success();

    assert_eq!(report_files(&dir).len(), 1);
}

#[test]
fn test_invalid_declarations_report_without_network() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("package.json"),
        r#"{"dependencies": {"weird": "not-a-version", "starred": "*"}}"#,
    )
    .unwrap();

    depaudit()
        .current_dir(dir.path())
        .arg(".")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 dependencies checked"))
        .stdout(predicate::str::contains("2 invalid declarations"));

    assert_eq!(report_files(&dir).len(), 1);
}

#[test]
fn test_malformed_manifest_fails_without_report() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("package.json"), "{ this is not json").unwrap();

    depaudit()
        .current_dir(dir.path())
        .arg(".")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse JSON"));

    assert!(report_files(&dir).is_empty());
}

#[test]
fn test_missing_root_fails() {
    let dir = TempDir::new().unwrap();

    depaudit()
        .current_dir(dir.path())
        .arg("/nonexistent/audit-root")
        .assert()
        .failure()
        .stderr(predicate::str::contains("root directory not found"));

    assert!(report_files(&dir).is_empty());
}

#[test]
fn test_unknown_flag_is_rejected() {
    depaudit().arg("--json").assert().failure();
}

#[test]
fn test_help_describes_root_argument() {
    depaudit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Root directory to scan"));
}
