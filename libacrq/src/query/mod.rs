//! Query pipeline: filter, sort, render.
//!
//! A pure, stateless transform over [`ManifestRecord`] sequences, applied in
//! a fixed order: filter first, then sort, then render. The renderers produce
//! the tool's three output shapes: the multi-line describe text, the
//! single-line listing, and the JSON array.

use crate::error::{AcrError, Result};
use crate::manifest::ManifestRecord;
use serde::Serialize;
use std::str::FromStr;


/// Timestamp format used by all rendered output.
pub const TIME_FMT: &str = "%Y-%m-%d %H:%M:%S";

/// Sort key for [`sort_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending by creation time.
    CreatedOn,
}

impl FromStr for SortKey {
    type Err = AcrError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "created_on" => Ok(SortKey::CreatedOn),
            other => Err(AcrError::invalid_argument(format!("Bad value: {}", other))),
        }
    }
}

/// Drops records with a zero size.
///
/// Idempotent: applying it twice yields the same result as once.
///
/// # Examples
///
/// ```
/// use libacrq::query::filter_non_zero_size;
///
/// let filtered = filter_non_zero_size(vec![]);
/// assert!(filtered.is_empty());
/// ```
pub fn filter_non_zero_size(records: Vec<ManifestRecord>) -> Vec<ManifestRecord> {
    records.into_iter().filter(|r| r.size_bytes > 0).collect()
}

/// Sorts records ascending by the given key.
///
/// The sort is stable: records comparing equal keep their original relative
/// order.
pub fn sort_by(mut records: Vec<ManifestRecord>, key: SortKey) -> Vec<ManifestRecord> {
    match key {
        SortKey::CreatedOn => records.sort_by_key(|r| r.created_on),
    }
    records
}

/// Renders one record as the multi-line describe output.
///
/// Field order is fixed: image reference, creation time, last update,
/// architecture, OS, size in whole mebibytes.
pub fn render_text(record: &ManifestRecord, image: &str, tag: &str) -> String {
    format!(
        "Image:        {}:{}\n\
         Created on:   {}\n\
         Last update:  {}\n\
         Architecture: {}\n\
         OS:           {}\n\
         Size:         {:.0} MBytes",
        image,
        tag,
        record.created_on.format(TIME_FMT),
        record.last_update.format(TIME_FMT),
        record.architecture,
        record.os,
        record.size_mb(),
    )
}

/// Renders one record as a single listing line:
/// `repository:tags    size MB    ref=digest`, tags joined with `|` and left
/// empty for untagged manifests.
pub fn render_list_line(record: &ManifestRecord) -> String {
    format!(
        "{}:{}    {} MB    ref={}",
        record.repository,
        record.tags.join("|"),
        record.size_mb(),
        record.digest,
    )
}

/// JSON projection of one record, with the wire key names the tool has
/// always emitted.
#[derive(Debug, Serialize)]
struct JsonRecord {
    created_on: String,
    last_update: String,
    registry: String,
    sha256: String,
    size: f64,
    tags: Vec<String>,
}

impl From<&ManifestRecord> for JsonRecord {
    fn from(record: &ManifestRecord) -> Self {
        Self {
            created_on: record.created_on.format(TIME_FMT).to_string(),
            last_update: record.last_update.format(TIME_FMT).to_string(),
            registry: record.repository.clone(),
            sha256: record.digest.clone(),
            size: record.size_mb(),
            tags: record.tags.clone(),
        }
    }
}

/// Renders records as a JSON array.
///
/// Per-record keys: `created_on`, `last_update`, `registry`, `sha256`,
/// `size` (MB, unrounded), `tags` (empty array for untagged manifests).
pub fn render_json(records: &[ManifestRecord]) -> Result<String> {
    let projected: Vec<JsonRecord> = records.iter().map(JsonRecord::from).collect();
    serde_json::to_string(&projected)
        .map_err(|e| AcrError::invalid_argument(format!("Failed to serialize records: {}", e)))
}
