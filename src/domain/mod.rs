//! Core domain models for depaudit
//!
//! This module contains the fundamental types used throughout the application:
//! - Declared dependencies as parsed from manifests
//! - Version coercion and gap classification
//! - Findings (one output row per declared dependency)
//! - Package metadata used for enrichment
//! - Run summary counters

mod dependency;
mod diff;
mod finding;
mod package_info;
mod summary;
mod version;

pub use dependency::DeclaredDependency;
pub use diff::DiffClass;
pub use finding::{Finding, LOOKUP_ERROR, NOT_AVAILABLE};
pub use package_info::PackageInfo;
pub use summary::AuditSummary;
pub use version::{classify, coerce};
