//! Documents command - list loaded documents and their indexes

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::services::Services;
use clap::Args;
use serde::Serialize;
use std::sync::Arc;

/// Arguments for the list-documents command
#[derive(Args, Debug)]
pub struct DocumentsArgs {
    /// Also list registered relationships
    #[arg(long, short = 'r')]
    pub relationships: bool,
}

/// One loaded document
#[derive(Debug, Serialize)]
pub struct DocumentInfo {
    pub name: String,
    pub kind: &'static str,
    pub entries: usize,
    pub indexed_keys: Vec<String>,
}

/// Documents response
#[derive(Debug, Serialize)]
pub struct DocumentsResponse {
    pub documents: Vec<DocumentInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relationships: Option<Vec<String>>,
}

/// Collect the response
pub fn list_documents(args: &DocumentsArgs, services: &Services) -> DocumentsResponse {
    let indexed = services.db.indexed_keys();

    let documents = services
        .db
        .document_names()
        .into_iter()
        .filter_map(|name| {
            let root = services.db.document(name)?;
            Some(DocumentInfo {
                name: name.to_string(),
                kind: root.kind(),
                entries: root.entry_count(),
                indexed_keys: indexed
                    .iter()
                    .filter(|key_ref| key_ref.document == name)
                    .map(|key_ref| key_ref.key.clone())
                    .collect(),
            })
        })
        .collect();

    let relationships = args.relationships.then(|| {
        services
            .relationships
            .iter()
            .map(ToString::to_string)
            .collect()
    });

    DocumentsResponse {
        documents,
        relationships,
    }
}

/// Execute the list-documents command
pub fn execute(
    args: DocumentsArgs,
    services: &Arc<Services>,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = list_documents(&args, services);

    match format {
        OutputFormat::Human => {
            if response.documents.is_empty() {
                output::print_warning("No documents loaded. Use --files or --dir.");
                return Ok(());
            }

            output::print_header("Documents:");
            for doc in &response.documents {
                println!(
                    "  {} {}",
                    colors::document(&doc.name),
                    colors::dim(&format!("({}, {} entries)", doc.kind, doc.entries))
                );
                if !doc.indexed_keys.is_empty() {
                    println!("    indexed: {}", colors::key(&doc.indexed_keys.join(", ")));
                }
            }

            if let Some(relationships) = &response.relationships {
                println!();
                output::print_header("Relationships:");
                for relationship in relationships {
                    println!("  {relationship}");
                }
            }
        }
        OutputFormat::Json => output::print_output(&response, format),
    }

    Ok(())
}
