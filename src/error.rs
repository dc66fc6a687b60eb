//! Application error types using thiserror
//!
//! Error hierarchy:
//! - DiscoveryError: the manifest walk failed (run-fatal)
//! - ManifestError: a manifest could not be read or parsed (run-fatal)
//! - RegistryError: registry communication failed (row-local; becomes a
//!   sentinel inside the affected finding, never aborts the run)
//! - ReportError: the report workbook could not be written (run-fatal)

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Manifest discovery errors
    #[error(transparent)]
    Discovery(#[from] DiscoveryError),

    /// Manifest file errors
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// Package registry errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Report generation errors
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Errors raised while walking the project tree for manifests
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Root directory missing or not a directory
    #[error("root directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// The file-tree walk failed partway
    #[error("failed to walk {path}: {message}")]
    WalkFailed { path: PathBuf, message: String },
}

/// Errors related to manifest file operations
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read a manifest file
    #[error("failed to read manifest file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest content is not valid JSON
    #[error("failed to parse JSON in {path}: {message}")]
    JsonParseError { path: PathBuf, message: String },
}

/// Errors related to npm registry communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package not found in the registry
    #[error("package '{package}' not found in npm registry")]
    PackageNotFound { package: String },

    /// Network request failed
    #[error("failed to fetch '{package}' from npm registry: {message}")]
    NetworkError { package: String, message: String },

    /// Response arrived but was not usable
    #[error("invalid response from npm registry for '{package}': {message}")]
    InvalidResponse { package: String, message: String },

    /// Request timed out
    #[error("timeout while fetching '{package}' from npm registry")]
    Timeout { package: String },
}

/// Errors raised while generating the spreadsheet report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Workbook construction or save failed
    #[error("failed to write report {path}: {source}")]
    Workbook {
        path: PathBuf,
        #[source]
        source: rust_xlsxwriter::XlsxError,
    },
}

impl DiscoveryError {
    /// Creates a new RootNotFound error
    pub fn root_not_found(path: impl Into<PathBuf>) -> Self {
        DiscoveryError::RootNotFound { path: path.into() }
    }

    /// Creates a new WalkFailed error
    pub fn walk_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        DiscoveryError::WalkFailed {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl ManifestError {
    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ManifestError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new JsonParseError
    pub fn json_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ManifestError::JsonParseError {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(package: impl Into<String>, message: impl Into<String>) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
        }
    }
}

impl ReportError {
    /// Creates a new Workbook error
    pub fn workbook(path: impl Into<PathBuf>, source: rust_xlsxwriter::XlsxError) -> Self {
        ReportError::Workbook {
            path: path.into(),
            source,
        }
    }
}
