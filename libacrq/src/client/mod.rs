//! HTTP client for the ACR metadata API.
//!
//! This module provides a thin blocking HTTP client built on reqwest for the
//! Azure Container Registry metadata endpoints (`/acr/v1/...`). The tool is
//! single-shot and interactive, so blocking I/O with one in-flight request is
//! the whole concurrency story.

use crate::auth::Credentials;
use crate::error::{AcrError, Result};
use crate::manifest::ManifestAttributes;
use reqwest::StatusCode;
use reqwest::blocking::{Client as ReqwestClient, Response};
use serde::Deserialize;
use std::time::Duration;


/// Envelope around a single manifest returned by
/// `/acr/v1/{repository}/_manifests/{digest}`.
#[derive(Debug, Deserialize)]
struct ManifestEnvelope {
    manifest: ManifestAttributes,
}

/// One page of manifests returned by `/acr/v1/{repository}/_manifests`.
#[derive(Debug, Deserialize)]
struct ManifestPageEnvelope {
    #[serde(default)]
    manifests: Vec<ManifestAttributes>,
}

/// Tag attributes returned by `/acr/v1/{repository}/_tags/{tag}`.
#[derive(Debug, Deserialize)]
struct TagAttributes {
    digest: String,
}

#[derive(Debug, Deserialize)]
struct TagEnvelope {
    tag: TagAttributes,
}

/// Configuration for the HTTP client.
///
/// # Examples
///
/// ```
/// use libacrq::client::ClientConfig;
///
/// let config = ClientConfig::new()
///     .with_timeout(60)
///     .with_max_idle_per_host(20);
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout in seconds (default: 30)
    pub timeout_seconds: u64,
    /// Maximum idle connections per host (default: 10)
    pub max_idle_per_host: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: 30,
            max_idle_per_host: 10,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the request timeout in seconds.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Sets the maximum idle connections per host.
    pub fn with_max_idle_per_host(mut self, max: usize) -> Self {
        self.max_idle_per_host = max;
        self
    }
}

/// Blocking HTTP client for ACR metadata operations.
#[derive(Debug, Clone)]
pub struct Client {
    /// The underlying HTTP client
    http_client: ReqwestClient,
    /// Normalized registry endpoint (e.g. "https://example.azurecr.io")
    endpoint: String,
    /// Precomputed Authorization header value, if not anonymous
    auth_header: Option<String>,
    /// Timeout carried for error messages
    timeout_seconds: u64,
}

impl Client {
    /// Creates a new client for the given endpoint with default configuration.
    ///
    /// The endpoint must already be normalized (see
    /// [`crate::config::RegistryConfig`]).
    pub fn new(endpoint: &str, credentials: Credentials) -> Result<Self> {
        Self::with_config(endpoint, credentials, ClientConfig::default())
    }

    /// Creates a new client with custom configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use libacrq::auth::Credentials;
    /// use libacrq::client::{Client, ClientConfig};
    ///
    /// let config = ClientConfig::new().with_timeout(60);
    /// let client =
    ///     Client::with_config("https://example.azurecr.io", Credentials::Anonymous, config)
    ///         .unwrap();
    /// ```
    pub fn with_config(
        endpoint: &str,
        credentials: Credentials,
        config: ClientConfig,
    ) -> Result<Self> {
        if endpoint.is_empty() {
            return Err(AcrError::config("endpoint not set"));
        }

        let http_client = ReqwestClient::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .pool_max_idle_per_host(config.max_idle_per_host)
            .build()
            .map_err(|e| AcrError::network_with_source("Failed to create HTTP client", e))?;

        Ok(Self {
            http_client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            auth_header: credentials.to_header_value(),
            timeout_seconds: config.timeout_seconds,
        })
    }

    /// Returns the registry endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetches the manifest attributes for a digest.
    ///
    /// Performs a GET request to `/acr/v1/{repository}/_manifests/{digest}`.
    pub(crate) fn fetch_manifest(
        &self,
        repository: &str,
        digest: &str,
    ) -> Result<ManifestAttributes> {
        let url = format!(
            "{}/acr/v1/{}/_manifests/{}",
            self.endpoint, repository, digest
        );

        let response = self.get(&url)?;
        let response = self.check_response_status(response, "manifest", digest)?;

        let envelope: ManifestEnvelope = response
            .json()
            .map_err(|e| AcrError::network_with_source("Failed to parse manifest response", e))?;

        Ok(envelope.manifest)
    }

    /// Resolves a tag to its manifest digest.
    ///
    /// Performs a GET request to `/acr/v1/{repository}/_tags/{tag}`.
    pub(crate) fn resolve_tag(&self, repository: &str, tag: &str) -> Result<String> {
        let url = format!("{}/acr/v1/{}/_tags/{}", self.endpoint, repository, tag);

        let response = self.get(&url)?;
        let response = self.check_response_status(response, "tag", tag)?;

        let envelope: TagEnvelope = response
            .json()
            .map_err(|e| AcrError::network_with_source("Failed to parse tag response", e))?;

        Ok(envelope.tag.digest)
    }

    /// Fetches one page of manifest attributes for a repository.
    ///
    /// The first page uses `/acr/v1/{repository}/_manifests`; continuation
    /// pages use the path from the previous response's `Link` header. Returns
    /// the page's manifests and the next page's path, if any.
    pub(crate) fn fetch_manifest_page(
        &self,
        repository: &str,
        page_path: Option<&str>,
    ) -> Result<(Vec<ManifestAttributes>, Option<String>)> {
        let url = match page_path {
            Some(path) => format!("{}{}", self.endpoint, path),
            None => format!("{}/acr/v1/{}/_manifests", self.endpoint, repository),
        };

        let response = self.get(&url)?;

        // Extract Link header for pagination before consuming the response
        let next_path = Self::extract_next_link(response.headers());

        let response = self.check_response_status(response, "repository", repository)?;

        let envelope: ManifestPageEnvelope = response
            .json()
            .map_err(|e| AcrError::network_with_source("Failed to parse manifests response", e))?;

        Ok((envelope.manifests, next_path))
    }

    /// Sends a GET request with the Authorization header when configured.
    fn get(&self, url: &str) -> Result<Response> {
        let mut request = self.http_client.get(url);

        if let Some(auth_header) = &self.auth_header {
            request = request.header("Authorization", auth_header);
        }

        request
            .send()
            .map_err(|e| self.translate_reqwest_error(e))
    }

    /// Extracts the next page path from the Link header.
    ///
    /// ACR paginates the metadata API with Link headers in the same shape as
    /// the OCI Distribution Specification:
    /// `Link: </acr/v1/svc/_manifests?last=sha256:abc&n=100>; rel="next"`
    fn extract_next_link(headers: &reqwest::header::HeaderMap) -> Option<String> {
        let link_header = headers.get(reqwest::header::LINK)?;
        let link_str = link_header.to_str().ok()?;

        for link_part in link_str.split(',') {
            let link_part = link_part.trim();

            if link_part.contains("rel=\"next\"") || link_part.contains("rel='next'") {
                if let Some(start) = link_part.find('<')
                    && let Some(end) = link_part.find('>')
                {
                    return Some(link_part[start + 1..end].to_string());
                }
            }
        }

        None
    }

    /// Translates a reqwest error into an AcrError.
    fn translate_reqwest_error(&self, error: reqwest::Error) -> AcrError {
        if error.is_timeout() {
            AcrError::network(format!(
                "Request to {} timed out after {} seconds",
                self.endpoint, self.timeout_seconds
            ))
        } else if error.is_connect() {
            AcrError::network_with_source(
                format!("Failed to connect to registry at {}", self.endpoint),
                error,
            )
        } else {
            AcrError::network_with_source(
                format!("Network error communicating with {}", self.endpoint),
                error,
            )
        }
    }

    /// Checks the HTTP response status and translates failures to AcrError.
    ///
    /// `resource_type`/`resource_name` describe what a 404 refers to, so the
    /// caller's context ends up in the error message.
    fn check_response_status(
        &self,
        response: Response,
        resource_type: &str,
        resource_name: &str,
    ) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().to_string();
        let error_body = response
            .text()
            .unwrap_or_else(|_| String::from("(unable to read response body)"));

        match status {
            StatusCode::UNAUTHORIZED => Err(AcrError::authentication(
                format!("Authentication required for {}: {}", url, error_body),
                Some(401),
            )),
            StatusCode::FORBIDDEN => Err(AcrError::authentication(
                format!("Access forbidden for {}: {}", url, error_body),
                Some(403),
            )),
            StatusCode::NOT_FOUND => Err(AcrError::not_found(resource_type, resource_name)),
            _ => Err(AcrError::network(format!(
                "HTTP {} from {}: {}",
                status.as_u16(),
                url,
                error_body
            ))),
        }
    }
}
