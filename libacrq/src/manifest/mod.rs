//! Manifest metadata model.
//!
//! [`ManifestRecord`] is an immutable, read-only projection of remote
//! registry state. Records are created by the registry on each query call,
//! consumed by the query pipeline, and never persisted or mutated locally.

use chrono::{DateTime, Utc};
use serde::Deserialize;


/// Manifest attributes as returned by the ACR metadata API (camelCase wire
/// names). Fields the registry may omit default to empty/zero.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ManifestAttributes {
    pub digest: String,
    #[serde(rename = "imageSize", default)]
    pub image_size: u64,
    #[serde(rename = "createdTime")]
    pub created_time: DateTime<Utc>,
    #[serde(rename = "lastUpdateTime")]
    pub last_update_time: DateTime<Utc>,
    #[serde(default)]
    pub architecture: Option<String>,
    #[serde(default)]
    pub os: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

/// Metadata for one artifact manifest in a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestRecord {
    /// Repository (image) name the manifest belongs to.
    pub repository: String,
    /// Content digest, unique within the repository (e.g. "sha256:...").
    pub digest: String,
    /// Tags pointing at this manifest; may be empty.
    pub tags: Vec<String>,
    /// Creation time reported by the registry.
    pub created_on: DateTime<Utc>,
    /// Last update time; never earlier than `created_on` for remote data.
    pub last_update: DateTime<Utc>,
    /// Manifest size in bytes.
    pub size_bytes: u64,
    /// Target architecture; empty when the registry does not report one.
    pub architecture: String,
    /// Target operating system; empty when the registry does not report one.
    pub os: String,
}

impl ManifestRecord {
    pub(crate) fn from_attributes(repository: &str, attrs: ManifestAttributes) -> Self {
        Self {
            repository: repository.to_string(),
            digest: attrs.digest,
            tags: attrs.tags.unwrap_or_default(),
            created_on: attrs.created_time,
            last_update: attrs.last_update_time,
            size_bytes: attrs.image_size,
            architecture: attrs.architecture.unwrap_or_default(),
            os: attrs.os.unwrap_or_default(),
        }
    }

    /// Returns the manifest size in mebibytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Utc;
    /// use libacrq::manifest::ManifestRecord;
    ///
    /// let record = ManifestRecord {
    ///     repository: "svc".to_string(),
    ///     digest: "sha256:aaa".to_string(),
    ///     tags: vec![],
    ///     created_on: Utc::now(),
    ///     last_update: Utc::now(),
    ///     size_bytes: 2 * 1024 * 1024,
    ///     architecture: String::new(),
    ///     os: String::new(),
    /// };
    /// assert_eq!(record.size_mb(), 2.0);
    /// ```
    pub fn size_mb(&self) -> f64 {
        self.size_bytes as f64 / (1024.0 * 1024.0)
    }
}
