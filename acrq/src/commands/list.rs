use crate::context::{AppContext, VerbosityLevel};
use crate::format;
use libacrq::Result;
use libacrq::auth::{CredentialProvider, EnvCredentialProvider};
use libacrq::config::RegistryConfig;
use libacrq::query::{self, SortKey};
use libacrq::registry::Registry;
use std::str::FromStr;

/// Options for the list command.
#[derive(Debug, Default)]
pub struct ListOptions {
    /// Drop manifests with a zero size.
    pub size_not_null: bool,
    /// Sort key name; only "created_on" is accepted.
    pub sort: Option<String>,
    /// Emit one plain text line per manifest instead of JSON.
    pub plain: bool,
}

/// Enumerates a repository and renders the listing.
///
/// The pipeline order is fixed: filter, then sort, then render. The sort key
/// is validated before any network call so a bad value fails fast.
pub fn run_list(
    config: &RegistryConfig,
    provider: &dyn CredentialProvider,
    repository: Option<&str>,
    options: &ListOptions,
) -> Result<String> {
    let sort_key = options
        .sort
        .as_deref()
        .map(SortKey::from_str)
        .transpose()?;

    let registry = Registry::new(config, provider)?;
    let repository = repository.unwrap_or_else(|| config.default_repository());

    let records: Result<Vec<_>> = registry.list(repository).collect();
    let mut records = records?;

    if options.size_not_null {
        records = query::filter_non_zero_size(records);
    }
    if let Some(key) = sort_key {
        records = query::sort_by(records, key);
    }

    if options.plain {
        Ok(records
            .iter()
            .map(query::render_list_line)
            .collect::<Vec<_>>()
            .join("\n"))
    } else {
        query::render_json(&records)
    }
}

/// Handle the list command
pub fn handle_list(
    ctx: &AppContext,
    config: &RegistryConfig,
    repository: Option<&str>,
    options: &ListOptions,
) {
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!(
            "Listing manifests in repository '{}'...",
            repository.unwrap_or_else(|| config.default_repository())
        ),
    );

    match run_list(config, &EnvCredentialProvider::new(), repository, options) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            format::error(ctx, &e.to_string());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
