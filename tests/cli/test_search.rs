//! Tests for the search CLI command
//!
//! Tests the search command handler with various scenarios:
//! - Matches joined across relationships
//! - Searches restricted to one document
//! - Not-found errors
//! - Output format variations

use crate::cli::test_helpers::create_cli_test_services;
use crate::common::assert_ids;
use jsonsearch::cli::commands::search::{execute, search, SearchArgs};
use jsonsearch::cli::OutputFormat;

fn args(document: &str, key: &str, value: &str, no_related: bool) -> SearchArgs {
    SearchArgs {
        document: document.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        no_related,
    }
}

/// Test search joined with related tickets
#[test]
fn test_search_joins_related_documents() {
    let (services, _data) = create_cli_test_services();

    let response = search(&args("organizations", "_id", "105", false), &services).unwrap();
    assert_eq!(response.total_results, 2);
    assert_ids(
        &response.results,
        &["105", "2217c7dc-7371-4401-8738-0a8a8aedc08d"],
    );
}

/// Test search restricted to the named document
#[test]
fn test_search_no_related() {
    let (services, _data) = create_cli_test_services();

    let response = search(&args("organizations", "_id", "105", true), &services).unwrap();
    assert_eq!(response.total_results, 1);
}

/// Test search with valid query in human format
#[test]
fn test_search_human() {
    let (services, _data) = create_cli_test_services();

    let result = execute(
        args("tickets", "submitter_id", "71", false),
        &services,
        OutputFormat::Human,
    );
    assert!(result.is_ok(), "Search should succeed: {:?}", result.err());
}

/// Test search in JSON format
#[test]
fn test_search_json() {
    let (services, _data) = create_cli_test_services();

    let response = search(&args("users", "name", "Elma Castro", false), &services).unwrap();
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json["total_results"], 1);
    assert_eq!(json["results"][0]["_id"], 38);
    assert_eq!(json["results"][0]["active"], true);

    let result = execute(
        args("users", "name", "Elma Castro", false),
        &services,
        OutputFormat::Json,
    );
    assert!(result.is_ok(), "JSON search should succeed: {:?}", result.err());
}

/// Test search with no matches
#[test]
fn test_search_no_matches() {
    let (services, _data) = create_cli_test_services();

    let result = execute(
        args("organizations", "name", "Initech", false),
        &services,
        OutputFormat::Human,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Initech"));
}

/// Test search on unknown document
#[test]
fn test_search_unknown_document() {
    let (services, _data) = create_cli_test_services();

    let err = search(&args("companies", "_id", "1", false), &services).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("companies"));
}
