//! Audit findings
//!
//! A finding is one output row: the result of resolving and optionally
//! enriching a single declared dependency. Every declared dependency produces
//! exactly one finding, whatever happens along the way; failures degrade to
//! sentinel values instead of aborting the run.

use crate::domain::{DeclaredDependency, DiffClass, PackageInfo};
use serde::Serialize;
use std::path::PathBuf;

/// Sentinel for fields with no available value
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel written as the latest version when the registry lookup failed
pub const LOOKUP_ERROR: &str = "Error";

/// One resolved (and possibly enriched) dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Manifest file, relative to the scan root
    pub manifest: PathBuf,
    /// Package name
    pub package: String,
    /// Coerced current version, or the raw declaration for invalid rows
    pub current_version: String,
    /// Latest published version, or a sentinel
    pub latest_version: String,
    /// Gap classification
    pub diff: DiffClass,
    /// Package description (enrichment), or an error message for failed rows
    pub description: String,
    /// Homepage URL (enrichment)
    pub homepage: String,
    /// Repository URL (enrichment)
    pub repository: String,
}

impl Finding {
    /// Finding for a dependency whose latest version was resolved
    ///
    /// Enrichment fields start at `N/A` and are filled in later for major
    /// gaps.
    pub fn resolved(
        dependency: &DeclaredDependency,
        current_version: impl Into<String>,
        latest_version: impl Into<String>,
        diff: DiffClass,
    ) -> Self {
        Self {
            manifest: dependency.manifest.clone(),
            package: dependency.name.clone(),
            current_version: current_version.into(),
            latest_version: latest_version.into(),
            diff,
            description: NOT_AVAILABLE.to_string(),
            homepage: NOT_AVAILABLE.to_string(),
            repository: NOT_AVAILABLE.to_string(),
        }
    }

    /// Finding for a declaration that could not be coerced to a version
    ///
    /// The raw declaration is preserved as the current version; no network
    /// call is made for such rows.
    pub fn invalid(dependency: &DeclaredDependency) -> Self {
        Self {
            manifest: dependency.manifest.clone(),
            package: dependency.name.clone(),
            current_version: dependency.spec.clone(),
            latest_version: NOT_AVAILABLE.to_string(),
            diff: DiffClass::Invalid,
            description: NOT_AVAILABLE.to_string(),
            homepage: NOT_AVAILABLE.to_string(),
            repository: NOT_AVAILABLE.to_string(),
        }
    }

    /// Finding for a dependency whose registry lookup failed
    ///
    /// The error message becomes the description so it survives into the
    /// report.
    pub fn lookup_failed(
        dependency: &DeclaredDependency,
        current_version: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            manifest: dependency.manifest.clone(),
            package: dependency.name.clone(),
            current_version: current_version.into(),
            latest_version: LOOKUP_ERROR.to_string(),
            diff: DiffClass::Error,
            description: message.into(),
            homepage: NOT_AVAILABLE.to_string(),
            repository: NOT_AVAILABLE.to_string(),
        }
    }

    /// Fill the enrichment fields from fetched metadata, in place
    pub fn apply_package_info(&mut self, info: PackageInfo) {
        self.description = info.description.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        self.homepage = info.homepage.unwrap_or_else(|| NOT_AVAILABLE.to_string());
        self.repository = info.repository.unwrap_or_else(|| NOT_AVAILABLE.to_string());
    }

    /// Record an enrichment failure without touching the classification
    ///
    /// The version comparison already succeeded, so the diff stays as
    /// computed; only the description carries the error.
    pub fn apply_enrichment_error(&mut self, message: impl Into<String>) {
        self.description = message.into();
        self.homepage = NOT_AVAILABLE.to_string();
        self.repository = NOT_AVAILABLE.to_string();
    }

    /// Returns true when this finding belongs on the Major Updates sheet
    pub fn is_major(&self) -> bool {
        self.diff.is_major()
    }
}
