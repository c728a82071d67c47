//! Registry configuration.
//!
//! Configuration is an explicit struct validated at construction time, before
//! any network operation is attempted. The CLI populates it from the
//! `ACR_URL` environment variable; library users can construct it directly.

use crate::error::{AcrError, Result};
use std::env;


/// Environment variable holding the registry endpoint URL.
pub const ENDPOINT_ENV_VAR: &str = "ACR_URL";

/// Error message reported when the endpoint is not configured.
pub const ENDPOINT_MISSING_MSG: &str = "The URL endpoint of the Azure container registry must be \
     set with environment variable ACR_URL";

/// Repository queried by `list` when the caller does not name one.
pub const DEFAULT_REPOSITORY: &str = "data-services";

/// Validated registry connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Normalized registry endpoint URL (e.g. "https://example.azurecr.io").
    endpoint: String,
    /// Repository used when `list` is invoked without one.
    default_repository: String,
}

impl RegistryConfig {
    /// Creates a configuration from an explicit endpoint URL.
    ///
    /// The endpoint is normalized: a missing scheme defaults to `https://`
    /// and trailing slashes are stripped. An empty endpoint fails with
    /// [`AcrError::Config`].
    ///
    /// # Examples
    ///
    /// ```
    /// use libacrq::config::RegistryConfig;
    ///
    /// let config = RegistryConfig::new("example.azurecr.io").unwrap();
    /// assert_eq!(config.endpoint(), "https://example.azurecr.io");
    /// ```
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Self::normalize_endpoint(endpoint)?;
        Ok(Self {
            endpoint,
            default_repository: DEFAULT_REPOSITORY.to_string(),
        })
    }

    /// Creates a configuration from the `ACR_URL` environment variable.
    ///
    /// Fails with [`AcrError::Config`] and the documented message when the
    /// variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        match env::var(ENDPOINT_ENV_VAR) {
            Ok(url) if !url.trim().is_empty() => Self::new(&url),
            _ => Err(AcrError::config(ENDPOINT_MISSING_MSG)),
        }
    }

    /// Sets the repository used by `list` when the caller supplies none.
    pub fn with_default_repository(mut self, repository: impl Into<String>) -> Self {
        self.default_repository = repository.into();
        self
    }

    /// Returns the normalized registry endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Returns the fallback repository name for `list`.
    pub fn default_repository(&self) -> &str {
        &self.default_repository
    }

    /// Normalizes an endpoint URL by ensuring it has a scheme and removing
    /// trailing slashes.
    fn normalize_endpoint(endpoint: &str) -> Result<String> {
        let endpoint = endpoint.trim();

        if endpoint.is_empty() {
            return Err(AcrError::config(ENDPOINT_MISSING_MSG));
        }

        // Registries are TLS-only in practice, so default to https.
        let endpoint = if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            format!("https://{}", endpoint)
        } else {
            endpoint.to_string()
        };

        Ok(endpoint.trim_end_matches('/').to_string())
    }
}
