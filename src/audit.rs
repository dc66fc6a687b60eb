//! Audit pipeline coordination
//!
//! This module drives the four stages in sequence:
//! discover -> resolve -> enrich -> hand findings to report generation.
//!
//! Registry requests are issued strictly one at a time and fully awaited, so
//! findings accumulate in discovery order with no collector discipline
//! needed. Lookup failures degrade to per-row sentinels; only discovery and
//! manifest parsing abort the run.

use crate::domain::{classify, coerce, DeclaredDependency, DiffClass, Finding};
use crate::error::AppError;
use crate::manifest::{discover_manifests, load_manifest};
use crate::progress::Progress;
use crate::registry::RegistryClient;
use semver::Version;
use std::path::Path;

/// Coordinates one audit run against a registry
pub struct Auditor {
    registry: Box<dyn RegistryClient>,
}

impl Auditor {
    /// Create an auditor backed by the given registry client
    pub fn new(registry: Box<dyn RegistryClient>) -> Self {
        Self { registry }
    }

    /// Run the full pipeline without progress display (tests, scripting)
    pub async fn run(&self, root: &Path) -> Result<Vec<Finding>, AppError> {
        self.run_with_progress(root, false).await
    }

    /// Run the full pipeline, optionally showing progress on stderr
    pub async fn run_with_progress(
        &self,
        root: &Path,
        show_progress: bool,
    ) -> Result<Vec<Finding>, AppError> {
        let mut progress = Progress::new(show_progress);

        progress.spinner("Discovering manifests...");
        let manifests = discover_manifests(root)?;
        progress.finish_and_clear();

        progress.spinner("Parsing manifests...");
        let mut declared = Vec::new();
        for manifest in &manifests {
            declared.extend(load_manifest(root, manifest)?);
        }
        progress.finish_and_clear();

        let mut findings = Vec::with_capacity(declared.len());
        progress.start(declared.len() as u64, "Checking dependencies");
        for dependency in &declared {
            progress.set_message(&dependency.name);
            findings.push(self.resolve(dependency).await);
            progress.inc();
        }
        progress.finish_and_clear();

        Ok(findings)
    }

    /// Resolve (and, for major gaps, enrich) a single declared dependency
    ///
    /// Always returns a finding; failures are folded into its fields.
    async fn resolve(&self, dependency: &DeclaredDependency) -> Finding {
        let current = match coerce(&dependency.spec) {
            Some(version) => version,
            None => return Finding::invalid(dependency),
        };

        let latest_raw = match self.registry.latest_version(&dependency.name).await {
            Ok(version) => version,
            Err(e) => return Finding::lookup_failed(dependency, current.to_string(), e.to_string()),
        };

        let latest = match Version::parse(&latest_raw) {
            Ok(version) => version,
            Err(e) => {
                return Finding::lookup_failed(
                    dependency,
                    current.to_string(),
                    format!("invalid latest version '{}': {}", latest_raw, e),
                )
            }
        };

        let diff = classify(&current, &latest);
        let mut finding = Finding::resolved(dependency, current.to_string(), latest_raw, diff);

        if diff == DiffClass::Major {
            let enrichment = self
                .registry
                .package_info(&dependency.name, &finding.latest_version)
                .await;
            match enrichment {
                Ok(info) => finding.apply_package_info(info),
                Err(e) => finding.apply_enrichment_error(e.to_string()),
            }
        }

        finding
    }
}
