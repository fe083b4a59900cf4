// Integration tests for loading documents and building services

use crate::common::{assert_ids, config_for, create_test_services, TestData};
use jsonsearch::core::loader::{self, DocumentLoader};
use jsonsearch::{JsonDb, JsonSearchError, Services};

#[test]
fn test_load_fixture_directory() {
    let data = TestData::new();
    let services = create_test_services(data.path(), &[], &[]);

    assert_eq!(
        services.db.document_names(),
        vec!["organizations", "tickets", "users"]
    );
    assert!(services.db.indexed_keys().is_empty());
}

#[test]
fn test_configured_indexes_and_relationships() {
    let data = TestData::new();
    let services = create_test_services(
        data.path(),
        &["organizations._id", "users._id"],
        &["organizations._id:users.organization_id"],
    );

    assert_eq!(services.db.indexed_keys().len(), 2);
    assert_ids(&services.search("organizations", "_id", "101").unwrap(), &["101", "38"]);
}

#[test]
fn test_unindexable_key_falls_back_to_scanning() {
    let data = TestData::new();
    let services = create_test_services(data.path(), &["organizations.tags"], &[]);

    assert!(services.db.indexed_keys().is_empty());
    assert_ids(
        &services.search("organizations", "tags", "Cherry").unwrap(),
        &["105"],
    );
}

#[test]
fn test_strict_indexing_fails_startup() {
    let data = TestData::new();
    let mut config = config_for(data.path());
    config.index.keys = vec!["organizations.tags".to_string()];
    config.index.strict = true;

    assert!(matches!(
        Services::new(config),
        Err(JsonSearchError::UnsupportedIndexType { .. })
    ));
}

#[test]
fn test_explicit_files_and_directory_combine() {
    let data = TestData::new();
    let extra = TestData::with_files(&[("groups.json", r#"{"admins": {"_id": 1}}"#)]);

    let mut config = config_for(data.path());
    config.documents.paths = vec![extra.file("groups.json"), data.file("users.json")];

    let services = Services::new(config).unwrap();
    assert_eq!(
        services.db.document_names(),
        vec!["groups", "organizations", "tickets", "users"]
    );
}

#[test]
fn test_include_patterns_filter_directory() {
    let data = TestData::with_files(&[
        ("orgs.json", "[]"),
        ("orgs.json.bak", "[]"),
        ("nested/people.json", "[]"),
    ]);

    let walker = DocumentLoader::new(vec!["*.json".to_string()], 1).unwrap();
    let files = walker.collect_files(data.path()).unwrap();
    assert_eq!(files.len(), 2);
}

#[test]
fn test_oversized_files_are_skipped() {
    let big = format!("[{}]", vec!["1"; 600_000].join(","));
    let data = TestData::with_files(&[("big.json", big.as_str()), ("small.json", "[]")]);

    let walker = DocumentLoader::new(vec!["*.json".to_string()], 1).unwrap();
    let files = walker.collect_files(data.path()).unwrap();
    assert_eq!(files, vec![data.file("small.json")]);
}

#[test]
fn test_reloading_a_file_replaces_the_document() {
    let data = TestData::with_files(&[("orgs.json", r#"[{"_id": 1}]"#)]);
    let mut db = JsonDb::new();
    loader::load_file(&mut db, &data.file("orgs.json")).unwrap();
    db.build_index("orgs", "_id").unwrap();

    std::fs::write(data.file("orgs.json"), r#"[{"_id": 2}]"#).unwrap();
    loader::load_file(&mut db, &data.file("orgs.json")).unwrap();

    assert!(db.index("orgs", "_id").is_none());
    assert!(db.search("orgs", "_id", "1").is_err());
    assert_eq!(db.search("orgs", "_id", "2").unwrap().len(), 1);
}

#[test]
fn test_missing_file_is_an_invalid_path() {
    let data = TestData::new();
    let mut db = JsonDb::new();
    let err = loader::load_file(&mut db, &data.file("absent.json")).unwrap_err();
    assert!(matches!(err, JsonSearchError::InvalidPath(_)));
}
