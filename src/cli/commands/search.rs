//! Search command - find the objects holding a key/value pair

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use crate::core::value::JsonValue;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Document to search (file stem, e.g. "organizations")
    pub document: String,

    /// Key to match
    pub key: String,

    /// Value to match, compared against the key's scalar value as text
    pub value: String,

    /// Search only the named document, ignoring relationships
    #[arg(long)]
    pub no_related: bool,
}

/// Search response
#[derive(Debug, Serialize)]
pub struct SearchResponseOutput<'a> {
    pub document: String,
    pub key: String,
    pub value: String,
    pub total_results: usize,
    pub results: Vec<&'a JsonValue>,
}

/// Run the search and collect the response
pub fn search<'a>(
    args: &SearchArgs,
    services: &'a Services,
) -> crate::core::error::Result<SearchResponseOutput<'a>> {
    let results = if args.no_related {
        services.db.search(&args.document, &args.key, &args.value)?
    } else {
        services.search(&args.document, &args.key, &args.value)?
    };

    Ok(SearchResponseOutput {
        document: args.document.clone(),
        key: args.key.clone(),
        value: args.value.clone(),
        total_results: results.len(),
        results,
    })
}

/// Execute the search command
pub fn execute(
    args: SearchArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = search(&args, services)?;

    match format {
        OutputFormat::Human => {
            println!(
                "Found {} result(s) for {} = '{}' in '{}':\n",
                colors::number(&response.total_results.to_string()),
                colors::key(&response.key),
                colors::label(&response.value),
                colors::document(&response.document)
            );

            for (i, result) in response.results.iter().enumerate() {
                println!("[{}]", colors::rank(&(i + 1).to_string()));
                println!("{}\n", output::indent(&output::format_value(result), 4));
            }
        }
        OutputFormat::Json => output::print_output(&response, format),
    }

    Ok(())
}
