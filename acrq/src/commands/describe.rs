use crate::context::{AppContext, VerbosityLevel};
use crate::format;
use libacrq::Result;
use libacrq::auth::{CredentialProvider, EnvCredentialProvider};
use libacrq::config::RegistryConfig;
use libacrq::query;
use libacrq::registry::Registry;

/// Fetches one manifest and renders the describe text.
///
/// Split from the handler so tests can run it against a mock registry and
/// inspect the output instead of the process exit code.
pub fn run_describe(
    config: &RegistryConfig,
    provider: &dyn CredentialProvider,
    image: &str,
    tag: &str,
) -> Result<String> {
    let registry = Registry::new(config, provider)?;
    let record = registry.describe(image, tag)?;
    Ok(query::render_text(&record, image, tag))
}

/// Handle the describe command
pub fn handle_describe(ctx: &AppContext, config: &RegistryConfig, image: &str, tag: &str) {
    format::print(
        ctx,
        VerbosityLevel::Verbose,
        &format!("Fetching manifest metadata for {}:{}...", image, tag),
    );

    match run_describe(config, &EnvCredentialProvider::new(), image, tag) {
        Ok(text) => println!("{}", text),
        Err(e) => {
            format::error(ctx, &e.to_string());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "describe_tests.rs"]
mod tests;
