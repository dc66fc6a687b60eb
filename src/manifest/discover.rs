//! Manifest discovery
//!
//! Recursively walks the root directory and collects every `package.json` at
//! any depth, reporting paths relative to the root in lexicographic order.
//! Deliberately naive: no ignore files, no workspace rules, no `node_modules`
//! filtering. Zero manifests is a valid outcome, not an error.

use crate::error::DiscoveryError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The one manifest file name this audit recognizes
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Find all manifest files under the root, as paths relative to it
pub fn discover_manifests(root: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    if !root.is_dir() {
        return Err(DiscoveryError::root_not_found(root));
    }

    let mut manifests = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|e| DiscoveryError::walk_failed(root, e.to_string()))?;
        if entry.file_type().is_file() && entry.file_name() == MANIFEST_FILE_NAME {
            let relative = entry
                .path()
                .strip_prefix(root)
                .unwrap_or_else(|_| entry.path())
                .to_path_buf();
            manifests.push(relative);
        }
    }

    manifests.sort();
    Ok(manifests)
}
