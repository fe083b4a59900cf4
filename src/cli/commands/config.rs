//! Config command - show current configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::services::Services;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Also show where the config file is looked up
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_file: Option<String>,
    #[serde(flatten)]
    pub config: &'a Config,
}

/// Execute the config command
pub fn execute(
    args: ConfigArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = services.config.as_ref();

    let response = ConfigResponse {
        config_file: args
            .all
            .then(|| XdgDirs::new().config_file().to_string_lossy().into_owned()),
        config,
    };

    match format {
        OutputFormat::Human => {
            output::print_header("Configuration:");
            if let Some(file) = &response.config_file {
                println!("  config_file: {}", colors::dim(file));
            }
            println!("  documents:");
            println!("    paths: {:?}", config.documents.paths);
            println!("    directory: {:?}", config.documents.directory);
            println!(
                "    include_patterns: {:?}",
                config.documents.include_patterns
            );
            println!(
                "    max_file_size_mb: {}",
                colors::number(&config.documents.max_file_size_mb.to_string())
            );
            println!("  index:");
            println!("    keys: {:?}", config.index.keys);
            println!("    strict: {}", config.index.strict);
            println!("  search:");
            println!("    relationships: {:?}", config.search.relationships);
        }
        OutputFormat::Json => output::print_output(&response, format),
    }

    Ok(())
}
