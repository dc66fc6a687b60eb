//! Manifest discovery and parsing
//!
//! This module provides functionality to:
//! - Walk a project tree for `package.json` files
//! - Parse the dependency declarations out of each manifest
//!
//! Both operations are run-fatal on failure: a tree that cannot be walked or
//! a manifest that cannot be parsed aborts the audit before any report is
//! written.

mod discover;
mod package_json;

pub use discover::{discover_manifests, MANIFEST_FILE_NAME};
pub use package_json::parse_dependencies;

use crate::domain::DeclaredDependency;
use crate::error::ManifestError;
use std::path::Path;

/// Read and parse one manifest, identified by its path relative to the root
pub fn load_manifest(
    root: &Path,
    relative: &Path,
) -> Result<Vec<DeclaredDependency>, ManifestError> {
    let full_path = root.join(relative);
    let content = std::fs::read_to_string(&full_path)
        .map_err(|e| ManifestError::read_error(&full_path, e))?;
    parse_dependencies(relative, &content)
}
