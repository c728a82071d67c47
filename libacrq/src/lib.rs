//! acrq - Azure Container Registry metadata query library
//!
//! libacrq queries an Azure Container Registry for artifact manifest
//! metadata: describe a single manifest, or enumerate every manifest in a
//! repository, then filter, sort, and render the results.
//!
//! # Quick Start
//!
//! ```no_run
//! use libacrq::auth::EnvCredentialProvider;
//! use libacrq::config::RegistryConfig;
//! use libacrq::registry::Registry;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RegistryConfig::new("https://example.azurecr.io")?;
//!     let registry = Registry::new(&config, &EnvCredentialProvider::new())?;
//!
//!     // Describe one image
//!     let record = registry.describe("data-services", "latest")?;
//!     println!("{}", record.digest);
//!
//!     // Enumerate a repository lazily
//!     for record in registry.list("data-services") {
//!         println!("{}", libacrq::query::render_list_line(&record?));
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`config`] - validated endpoint configuration (`ACR_URL`)
//! - [`auth`] - credentials and the injectable [`auth::CredentialProvider`]
//! - [`client`] - blocking HTTP transport for the ACR metadata API
//! - [`manifest`] - the immutable [`ManifestRecord`] projection
//! - [`registry`] - the `describe` and `list` operations
//! - [`query`] - filter/sort/render pipeline
//! - [`error`] - the [`AcrError`] taxonomy

#![warn(clippy::all)]

/// Returns the libacrq crate version.
///
/// # Examples
///
/// ```
/// let version = libacrq::version();
/// assert!(!version.is_empty());
/// ```
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

// Re-export commonly used types for convenience
pub use auth::{CredentialProvider, Credentials};
pub use config::RegistryConfig;
pub use error::{AcrError, Result};
pub use manifest::ManifestRecord;
pub use registry::Registry;

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod manifest;
pub mod query;
pub mod registry;
