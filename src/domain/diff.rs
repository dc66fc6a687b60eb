//! Version gap classification
//!
//! Mirrors npm's `semver.diff` categories, extended with two audit-specific
//! sentinels: `invalid` for declarations that cannot be coerced to a version,
//! and `error` for registry lookups that failed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of the gap between a declared version and the latest release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffClass {
    /// Declared version is already the latest
    None,
    /// Patch-level gap (e.g. 1.0.0 -> 1.0.4)
    Patch,
    /// Minor-level gap (e.g. 1.9.9 -> 1.10.0)
    Minor,
    /// Major-level gap (e.g. 1.9.9 -> 2.0.0)
    Major,
    /// Major-level gap where the newer side is a prerelease
    Premajor,
    /// Minor-level gap where the newer side is a prerelease
    Preminor,
    /// Patch-level gap where the newer side is a prerelease
    Prepatch,
    /// Only the prerelease identifiers differ
    Prerelease,
    /// Declared version could not be coerced to a semantic version
    Invalid,
    /// Registry lookup failed for this dependency
    Error,
}

impl DiffClass {
    /// Plain lowercase label, as written into the report
    pub fn label(&self) -> &'static str {
        match self {
            DiffClass::None => "none",
            DiffClass::Patch => "patch",
            DiffClass::Minor => "minor",
            DiffClass::Major => "major",
            DiffClass::Premajor => "premajor",
            DiffClass::Preminor => "preminor",
            DiffClass::Prepatch => "prepatch",
            DiffClass::Prerelease => "prerelease",
            DiffClass::Invalid => "invalid",
            DiffClass::Error => "error",
        }
    }

    /// Returns true for the classification that triggers metadata enrichment
    pub fn is_major(&self) -> bool {
        matches!(self, DiffClass::Major)
    }

    /// Returns true for any prerelease-qualified classification
    pub fn is_prerelease_variant(&self) -> bool {
        matches!(
            self,
            DiffClass::Premajor | DiffClass::Preminor | DiffClass::Prepatch | DiffClass::Prerelease
        )
    }
}

impl fmt::Display for DiffClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
