//! Descriptive package metadata fetched during enrichment

/// Human-readable metadata for one published package version
///
/// Every field is optional because the registry does not require any of them;
/// absent fields surface in the report as the `N/A` sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageInfo {
    /// Short package description
    pub description: Option<String>,
    /// Homepage URL
    pub homepage: Option<String>,
    /// Source repository URL
    pub repository: Option<String>,
}

impl PackageInfo {
    /// Creates metadata with all three fields present
    pub fn new(
        description: impl Into<String>,
        homepage: impl Into<String>,
        repository: impl Into<String>,
    ) -> Self {
        Self {
            description: Some(description.into()),
            homepage: Some(homepage.into()),
            repository: Some(repository.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_info_new() {
        let info = PackageInfo::new("padding", "https://example.com", "git://example.com/x.git");
        assert_eq!(info.description.as_deref(), Some("padding"));
        assert_eq!(info.homepage.as_deref(), Some("https://example.com"));
        assert_eq!(info.repository.as_deref(), Some("git://example.com/x.git"));
    }

    #[test]
    fn test_package_info_default_is_empty() {
        let info = PackageInfo::default();
        assert!(info.description.is_none());
        assert!(info.homepage.is_none());
        assert!(info.repository.is_none());
    }
}
