//! npm registry implementation
//!
//! Two endpoints are consumed, both read-only:
//! - `GET {base}/{package}` for the package document (`dist-tags.latest`)
//! - `GET {base}/{package}/{version}` for one version's metadata

use crate::domain::PackageInfo;
use crate::error::RegistryError;
use crate::registry::{HttpClient, RegistryClient};
use async_trait::async_trait;
use serde::Deserialize;

/// npm registry base URL
const NPM_REGISTRY_URL: &str = "https://registry.npmjs.org";

/// Live npm registry client
pub struct NpmRegistry {
    client: HttpClient,
    base_url: String,
}

/// Package document, reduced to the dist-tags we read
#[derive(Debug, Deserialize)]
struct PackageDocument {
    #[serde(rename = "dist-tags", default)]
    dist_tags: DistTags,
}

#[derive(Debug, Default, Deserialize)]
struct DistTags {
    latest: Option<String>,
}

/// Version document, reduced to the descriptive fields we read
#[derive(Debug, Deserialize)]
struct VersionDocument {
    description: Option<String>,
    homepage: Option<String>,
    repository: Option<RepositoryField>,
}

/// The registry usually ships `repository` as `{type, url}`, but older
/// packages carry a bare string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RepositoryField {
    Detailed { url: Option<String> },
    Bare(String),
}

impl RepositoryField {
    fn into_url(self) -> Option<String> {
        match self {
            RepositoryField::Detailed { url } => url,
            RepositoryField::Bare(url) => Some(url),
        }
    }
}

impl NpmRegistry {
    /// Create a client against the public npm registry
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            base_url: NPM_REGISTRY_URL.to_string(),
        }
    }

    /// Point the client at a different registry base URL (mirrors, test servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn package_url(&self, package: &str) -> String {
        format!("{}/{}", self.base_url, package)
    }

    fn version_url(&self, package: &str, version: &str) -> String {
        format!("{}/{}/{}", self.base_url, package, version)
    }
}

#[async_trait]
impl RegistryClient for NpmRegistry {
    async fn latest_version(&self, package: &str) -> Result<String, RegistryError> {
        let url = self.package_url(package);
        let document: PackageDocument = self.client.get_json(&url, package).await?;

        document
            .dist_tags
            .latest
            .ok_or_else(|| RegistryError::invalid_response(package, "missing latest dist-tag"))
    }

    async fn package_info(
        &self,
        package: &str,
        version: &str,
    ) -> Result<PackageInfo, RegistryError> {
        let url = self.version_url(package, version);
        let document: VersionDocument = self.client.get_json(&url, package).await?;

        Ok(PackageInfo {
            description: document.description,
            homepage: document.homepage,
            repository: document.repository.and_then(RepositoryField::into_url),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> NpmRegistry {
        NpmRegistry::new(HttpClient::new().unwrap())
    }

    #[test]
    fn test_package_url() {
        assert_eq!(
            registry().package_url("lodash"),
            "https://registry.npmjs.org/lodash"
        );
    }

    #[test]
    fn test_package_url_scoped() {
        assert_eq!(
            registry().package_url("@types/node"),
            "https://registry.npmjs.org/@types/node"
        );
    }

    #[test]
    fn test_version_url() {
        assert_eq!(
            registry().version_url("left-pad", "2.0.0"),
            "https://registry.npmjs.org/left-pad/2.0.0"
        );
    }

    #[test]
    fn test_with_base_url() {
        let registry = registry().with_base_url("http://localhost:4873");
        assert_eq!(
            registry.package_url("lodash"),
            "http://localhost:4873/lodash"
        );
    }

    #[test]
    fn test_parse_package_document() {
        let json = r#"{
            "name": "left-pad",
            "dist-tags": { "latest": "2.0.0", "next": "3.0.0-rc.1" },
            "versions": {}
        }"#;

        let document: PackageDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.dist_tags.latest.as_deref(), Some("2.0.0"));
    }

    #[test]
    fn test_parse_package_document_without_dist_tags() {
        let document: PackageDocument = serde_json::from_str(r#"{"name": "x"}"#).unwrap();
        assert!(document.dist_tags.latest.is_none());
    }

    #[test]
    fn test_parse_version_document_object_repository() {
        let json = r#"{
            "description": "padding",
            "homepage": "https://example.com",
            "repository": { "type": "git", "url": "git://example.com/left-pad.git" }
        }"#;

        let document: VersionDocument = serde_json::from_str(json).unwrap();
        assert_eq!(document.description.as_deref(), Some("padding"));
        assert_eq!(
            document.repository.unwrap().into_url().as_deref(),
            Some("git://example.com/left-pad.git")
        );
    }

    #[test]
    fn test_parse_version_document_string_repository() {
        let json = r#"{ "repository": "github:user/repo" }"#;
        let document: VersionDocument = serde_json::from_str(json).unwrap();
        assert_eq!(
            document.repository.unwrap().into_url().as_deref(),
            Some("github:user/repo")
        );
    }

    #[test]
    fn test_parse_version_document_empty() {
        let document: VersionDocument = serde_json::from_str("{}").unwrap();
        assert!(document.description.is_none());
        assert!(document.homepage.is_none());
        assert!(document.repository.is_none());
    }
}
