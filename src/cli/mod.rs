//! CLI adapter for jsonsearch
//!
//! Provides a command-line interface over the core search engine.
//! Depends on `core/`; `core/` never depends on it.
//!
//! # Architecture
//!
//! ```text
//! +------------------+      +------------------+
//! |      cli/        | ---> |     core/        |
//! | (clap adapter)   |      |  (domain logic)  |
//! +------------------+      +------------------+
//! ```

pub mod commands;
pub mod output;

use crate::core::config::{merge_unique, Config};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// jsonsearch - search JSON documents by key and value
///
/// Loads JSON documents, optionally indexes keys, and finds the objects
/// holding a key/value pair. Relationships join matches across documents.
#[derive(Parser, Debug)]
#[command(name = "jsonsearch")]
#[command(version)]
#[command(about = "In-memory key/value search over JSON documents", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Document files to load (comma separated or repeated)
    #[arg(long, global = true, value_delimiter = ',')]
    pub files: Vec<PathBuf>,

    /// Directory walked for *.json documents
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Keys to index, as document.key (comma separated or repeated)
    #[arg(long = "index-by", global = true, value_delimiter = ',')]
    pub index_by: Vec<String>,

    /// Relationships, as docA.key:docB.key (comma separated or repeated)
    #[arg(long, global = true, value_delimiter = ',')]
    pub relationships: Vec<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the objects holding a key/value pair
    Search(commands::SearchArgs),

    /// List loaded documents and their indexed keys
    #[command(name = "list-documents")]
    ListDocuments(commands::DocumentsArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  jsonsearch completions bash > ~/.local/share/bash-completion/completions/jsonsearch
    ///   zsh:   jsonsearch completions zsh > ~/.zfunc/_jsonsearch
    ///   fish:  jsonsearch completions fish > ~/.config/fish/completions/jsonsearch.fish
    Completions(commands::CompletionsArgs),
}

impl Cli {
    /// Layer command-line options over the loaded configuration.
    ///
    /// Lists are appended; `--dir` replaces the configured directory.
    pub fn apply_overrides(&self, config: &mut Config) {
        merge_unique(&mut config.documents.paths, self.files.iter().cloned());
        if let Some(dir) = &self.dir {
            config.documents.directory = Some(dir.clone());
        }
        merge_unique(&mut config.index.keys, trimmed(&self.index_by));
        merge_unique(
            &mut config.search.relationships,
            trimmed(&self.relationships),
        );
    }
}

fn trimmed(items: &[String]) -> Vec<String> {
    items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::services::Services;
    use std::sync::Arc;

    // Handle completions command early (doesn't need services)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    // Load configuration
    let mut config = Config::load()?;
    cli.apply_overrides(&mut config);
    config.validate()?;
    config.log_config();

    // Create services
    let services = Arc::new(Services::new(config)?);

    // Execute command
    match cli.command {
        Commands::Search(args) => commands::search::execute(args, &services, cli.format),
        Commands::ListDocuments(args) => {
            commands::documents::execute(args, &services, cli.format)
        }
        Commands::ShowConfig(args) => commands::config::execute(args, &services, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}
