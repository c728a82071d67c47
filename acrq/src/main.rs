use clap::{CommandFactory, Parser, Subcommand};
use libacrq::config::RegistryConfig;

mod commands;
mod context;
mod format;
mod version;

const EXAMPLES: &str = "\
Examples:
    acrq list
    acrq list my-repository
    acrq list --size-not-null --sort created_on my-repository
    acrq describe my-image v1.2
    acrq describe my-image

The registry endpoint is read from the ACR_URL environment variable.";

/// acrq - Azure Container Registry metadata query tool
///
/// Queries an Azure container registry for artifact manifest metadata and
/// prints it as text or JSON.
#[derive(Parser, Debug)]
#[command(name = "acrq")]
#[command(version, about, long_about = None, after_help = EXAMPLES)]
struct Cli {
    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Control colored output: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Describe a specific image
    Describe {
        /// Image (repository) name
        image: String,
        /// Tag or digest reference
        #[arg(default_value = "latest")]
        tag: String,
    },
    /// List images in a repository as a JSON array
    #[command(visible_alias = "ls")]
    List {
        /// Repository name (defaults to "data-services")
        repository: Option<String>,
        /// Do not list images with a size of zero
        #[arg(long)]
        size_not_null: bool,
        /// Sorting order: 'created_on'
        #[arg(long)]
        sort: Option<String>,
        /// One plain text line per image instead of JSON
        #[arg(long)]
        plain: bool,
    },
    /// Display version information
    Version,
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completion for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Resolves the registry endpoint from ACR_URL, before any command logic.
///
/// The config error's Display is the exact documented message, printed bare
/// so scripts can match it.
fn endpoint_config() -> RegistryConfig {
    match RegistryConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let ctx = context::AppContext::build(
        format::ColorChoice::from(cli.color.as_str()),
        context::VerbosityLevel::from_count(cli.verbose),
    );

    match cli.command {
        Commands::Describe { image, tag } => {
            let config = endpoint_config();
            commands::describe::handle_describe(&ctx, &config, &image, &tag);
        }
        Commands::List {
            repository,
            size_not_null,
            sort,
            plain,
        } => {
            let config = endpoint_config();
            let options = commands::list::ListOptions {
                size_not_null,
                sort,
                plain,
            };
            commands::list::handle_list(&ctx, &config, repository.as_deref(), &options);
        }
        Commands::Version => {
            version::print_version();
        }
        Commands::Completion { shell } => {
            let mut cmd = Cli::command();
            let bin_name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, bin_name, &mut std::io::stdout());
        }
    }
}
