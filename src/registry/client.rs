//! HTTP client shared foundation
//!
//! Owns User-Agent setup and the mapping from HTTP outcomes to registry
//! errors. No retry policy and no extra timeout: a failed request is reported
//! once and the caller records it against the one affected dependency.

use crate::error::RegistryError;
use reqwest::Client;

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("depaudit/", env!("CARGO_PKG_VERSION"));

/// HTTP client wrapper for registry requests
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the default User-Agent
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_user_agent(DEFAULT_USER_AGENT)
    }

    /// Create a new HTTP client with a custom User-Agent
    pub fn with_user_agent(user_agent: &str) -> Result<Self, RegistryError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| RegistryError::NetworkError {
                package: String::new(),
                message: format!("failed to create HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    /// Get the underlying reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Perform a GET request and parse the JSON response
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        package: &str,
    ) -> Result<T, RegistryError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                RegistryError::timeout(package)
            } else {
                RegistryError::network_error(package, e.to_string())
            }
        })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RegistryError::package_not_found(package));
        }

        if !response.status().is_success() {
            return Err(RegistryError::network_error(
                package,
                format!("HTTP {}", response.status()),
            ));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RegistryError::invalid_response(package, format!("failed to parse JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_http_client_with_user_agent() {
        let client = HttpClient::with_user_agent("audit-test/1.0");
        assert!(client.is_ok());
    }

    #[test]
    fn test_default_user_agent() {
        assert!(DEFAULT_USER_AGENT.starts_with("depaudit/"));
    }

    #[tokio::test]
    async fn test_get_json_unreachable_host_is_network_error() {
        let client = HttpClient::new().unwrap();
        let result: Result<serde_json::Value, _> = client
            .get_json("http://127.0.0.1:1/left-pad", "left-pad")
            .await;

        match result {
            Err(RegistryError::NetworkError { package, .. }) => assert_eq!(package, "left-pad"),
            Err(RegistryError::Timeout { .. }) => {}
            other => panic!("expected network error, got {:?}", other.map(|_| ())),
        }
    }
}
