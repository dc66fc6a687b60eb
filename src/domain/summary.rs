//! Run summary counters

use crate::domain::{DiffClass, Finding};

/// Aggregate counts over a finished audit, for the console summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSummary {
    /// Total findings (equals total declared dependencies)
    pub total: usize,
    /// Already at the latest version
    pub up_to_date: usize,
    /// Patch-level gaps
    pub patch: usize,
    /// Minor-level gaps
    pub minor: usize,
    /// Major-level gaps
    pub major: usize,
    /// Any prerelease-qualified gap
    pub prerelease: usize,
    /// Declarations that could not be coerced
    pub invalid: usize,
    /// Registry lookups that failed
    pub errors: usize,
}

impl AuditSummary {
    /// Tally a slice of findings
    pub fn from_findings(findings: &[Finding]) -> Self {
        let mut summary = Self {
            total: findings.len(),
            ..Self::default()
        };
        for finding in findings {
            match finding.diff {
                DiffClass::None => summary.up_to_date += 1,
                DiffClass::Patch => summary.patch += 1,
                DiffClass::Minor => summary.minor += 1,
                DiffClass::Major => summary.major += 1,
                DiffClass::Invalid => summary.invalid += 1,
                DiffClass::Error => summary.errors += 1,
                diff if diff.is_prerelease_variant() => summary.prerelease += 1,
                _ => {}
            }
        }
        summary
    }
}
