//! npm registry access
//!
//! This module provides:
//! - A thin HTTP client wrapper over reqwest with status-code mapping
//! - The `RegistryClient` trait, the seam the audit pipeline talks through
//! - The live npm registry implementation
//!
//! Keeping the pipeline behind a trait lets tests substitute an in-memory
//! registry instead of the network.

mod client;
mod npm;

pub use client::HttpClient;
pub use npm::NpmRegistry;

use crate::domain::PackageInfo;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Read-only view of a package registry
#[async_trait]
pub trait RegistryClient: Send + Sync {
    /// Latest published version of a package (its `latest` dist-tag)
    async fn latest_version(&self, package: &str) -> Result<String, RegistryError>;

    /// Descriptive metadata for one specific published version
    async fn package_info(
        &self,
        package: &str,
        version: &str,
    ) -> Result<PackageInfo, RegistryError>;
}
