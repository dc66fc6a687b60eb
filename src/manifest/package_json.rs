//! package.json parsing
//!
//! Merges `dependencies` and `devDependencies` into one name -> version-spec
//! mapping for the audit; on a duplicate key the devDependencies value wins.
//! Declaration order is preserved (serde_json's `preserve_order` feature) so
//! report rows come out in the order people wrote their manifests.

use crate::domain::DeclaredDependency;
use crate::error::ManifestError;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::path::Path;

#[derive(Debug, Default, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: Map<String, Value>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: Map<String, Value>,
}

/// Parse all dependency declarations out of one manifest's content
///
/// `manifest` is the root-relative path recorded on every declaration.
pub fn parse_dependencies(
    manifest: &Path,
    content: &str,
) -> Result<Vec<DeclaredDependency>, ManifestError> {
    let parsed: PackageJson = serde_json::from_str(content)
        .map_err(|e| ManifestError::json_parse_error(manifest, e.to_string()))?;

    let mut merged = parsed.dependencies;
    for (name, value) in parsed.dev_dependencies {
        merged.insert(name, value);
    }

    Ok(merged
        .into_iter()
        .map(|(name, value)| {
            // Version specs are strings in well-formed manifests; anything
            // else is serialized verbatim and left to version coercion.
            let spec = match value {
                Value::String(s) => s,
                other => other.to_string(),
            };
            DeclaredDependency::new(manifest, name, spec)
        })
        .collect())
}
