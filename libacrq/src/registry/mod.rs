//! Registry query operations.
//!
//! [`Registry`] is the high-level entry point: it owns the HTTP client and
//! exposes the two read operations of the tool, `describe` and `list`. It
//! performs no retries and keeps no local state between calls; every record
//! it produces is a fresh projection of remote state.

use crate::auth::CredentialProvider;
use crate::client::Client;
use crate::config::RegistryConfig;
use crate::error::{AcrError, Result};
use crate::manifest::ManifestRecord;


/// High-level client for manifest metadata queries.
pub struct Registry {
    client: Client,
    default_repository: String,
}

impl Registry {
    /// Creates a `Registry` from validated configuration and a credential
    /// provider.
    ///
    /// Credentials are resolved once, here, so a broken provider surfaces at
    /// construction rather than on first use.
    ///
    /// # Examples
    ///
    /// ```
    /// use libacrq::auth::StaticCredentialProvider;
    /// use libacrq::config::RegistryConfig;
    /// use libacrq::registry::Registry;
    ///
    /// let config = RegistryConfig::new("https://example.azurecr.io").unwrap();
    /// let provider = StaticCredentialProvider::anonymous();
    /// let registry = Registry::new(&config, &provider).unwrap();
    /// ```
    pub fn new(config: &RegistryConfig, provider: &dyn CredentialProvider) -> Result<Self> {
        let credentials = provider.credentials()?;
        let client = Client::new(config.endpoint(), credentials)?;

        Ok(Self {
            client,
            default_repository: config.default_repository().to_string(),
        })
    }

    /// Returns the repository queried when `list` gets an empty name.
    pub fn default_repository(&self) -> &str {
        &self.default_repository
    }

    /// Fetches the manifest metadata for one reference.
    ///
    /// A reference starting with `sha256:` is treated as a digest and fetched
    /// directly; anything else is treated as a tag and resolved to a digest
    /// first.
    ///
    /// # Errors
    ///
    /// - [`AcrError::InvalidArgument`] if `repository` is empty
    /// - [`AcrError::NotFound`] if the repository, tag, or digest is unknown
    /// - [`AcrError::Authentication`] on credential failure (401/403)
    /// - [`AcrError::Network`] on transport failure
    pub fn describe(&self, repository: &str, reference: &str) -> Result<ManifestRecord> {
        if repository.is_empty() {
            return Err(AcrError::invalid_argument("repository must not be empty"));
        }

        let digest = if reference.starts_with("sha256:") {
            reference.to_string()
        } else {
            self.client.resolve_tag(repository, reference)?
        };

        let attrs = self.client.fetch_manifest(repository, &digest)?;
        Ok(ManifestRecord::from_attributes(repository, attrs))
    }

    /// Enumerates all manifests in a repository.
    ///
    /// Returns a lazy iterator: each page is fetched from the registry on
    /// demand, so large repositories are never buffered whole. Every call
    /// produces a fresh iterator that restarts from the first page. An empty
    /// repository yields an empty iterator, not an error.
    ///
    /// An empty `repository` falls back to the configured default repository.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use libacrq::auth::StaticCredentialProvider;
    /// # use libacrq::config::RegistryConfig;
    /// # use libacrq::registry::Registry;
    /// # fn main() -> libacrq::error::Result<()> {
    /// let config = RegistryConfig::new("https://example.azurecr.io")?;
    /// let provider = StaticCredentialProvider::anonymous();
    /// let registry = Registry::new(&config, &provider)?;
    ///
    /// for record in registry.list("data-services") {
    ///     let record = record?;
    ///     println!("{}", record.digest);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn list<'a>(&'a self, repository: &str) -> ManifestPages<'a> {
        let repository = if repository.is_empty() {
            self.default_repository.clone()
        } else {
            repository.to_string()
        };

        ManifestPages {
            client: &self.client,
            repository,
            buffered: Vec::new(),
            next_page: None,
            state: PageState::Initial,
        }
    }
}

enum PageState {
    /// No page fetched yet.
    Initial,
    /// More pages may follow (`next_page` holds the continuation path).
    InProgress,
    /// Enumeration finished, either exhausted or after an error.
    Done,
}

/// Lazy iterator over all manifests of a repository.
///
/// Yields `Result<ManifestRecord>`; a page fetch failure is yielded once and
/// ends the iteration, so collecting into `Result<Vec<_>>` treats it as a
/// full failure and discards partial results.
pub struct ManifestPages<'a> {
    client: &'a Client,
    repository: String,
    buffered: Vec<ManifestRecord>,
    next_page: Option<String>,
    state: PageState,
}

impl ManifestPages<'_> {
    fn fetch_next_page(&mut self) -> Result<()> {
        let page_path = match self.state {
            PageState::Initial => None,
            PageState::InProgress => self.next_page.take(),
            PageState::Done => return Ok(()),
        };

        let (attrs, next) = self
            .client
            .fetch_manifest_page(&self.repository, page_path.as_deref())?;

        self.state = match next {
            Some(_) => PageState::InProgress,
            None => PageState::Done,
        };
        self.next_page = next;

        // Reverse so pop() returns records in page order.
        self.buffered = attrs
            .into_iter()
            .rev()
            .map(|a| ManifestRecord::from_attributes(&self.repository, a))
            .collect();

        Ok(())
    }
}

impl Iterator for ManifestPages<'_> {
    type Item = Result<ManifestRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(record) = self.buffered.pop() {
                return Some(Ok(record));
            }

            match self.state {
                PageState::Done => return None,
                _ => {
                    if let Err(e) = self.fetch_next_page() {
                        self.state = PageState::Done;
                        return Some(Err(e));
                    }
                    // A fetched page may legitimately be empty; loop to
                    // either pop a record or observe Done.
                }
            }
        }
    }
}
