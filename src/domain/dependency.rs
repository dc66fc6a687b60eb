//! Declared dependency structures

use std::fmt;
use std::path::PathBuf;

/// A single dependency declaration found in a manifest
///
/// The version spec is kept exactly as written in the manifest; coercion to a
/// concrete version happens later, during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredDependency {
    /// Manifest file this declaration came from, relative to the scan root
    pub manifest: PathBuf,
    /// Package name
    pub name: String,
    /// Raw declared version string (exact version, range expression, or junk)
    pub spec: String,
}

impl DeclaredDependency {
    /// Creates a new declared dependency
    pub fn new(
        manifest: impl Into<PathBuf>,
        name: impl Into<String>,
        spec: impl Into<String>,
    ) -> Self {
        Self {
            manifest: manifest.into(),
            name: name.into(),
            spec: spec.into(),
        }
    }
}

impl fmt::Display for DeclaredDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}@{} ({})",
            self.name,
            self.spec,
            self.manifest.display()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_dependency_new() {
        let dep = DeclaredDependency::new("pkg/package.json", "lodash", "^4.17.21");
        assert_eq!(dep.manifest, PathBuf::from("pkg/package.json"));
        assert_eq!(dep.name, "lodash");
        assert_eq!(dep.spec, "^4.17.21");
    }

    #[test]
    fn test_declared_dependency_display() {
        let dep = DeclaredDependency::new("package.json", "react", "~18.2.0");
        assert_eq!(format!("{}", dep), "react@~18.2.0 (package.json)");
    }

    #[test]
    fn test_declared_dependency_clone_equality() {
        let dep = DeclaredDependency::new("package.json", "express", "4.18.2");
        assert_eq!(dep.clone(), dep);
    }
}
