// Integration tests for relationship joins

use crate::common::{assert_ids, ids, sample_db};
use jsonsearch::core::relationship::parse_relationships;
use jsonsearch::{JsonDb, JsonSearchError, JsonValue, Relationship};

fn org_tickets() -> Vec<Relationship> {
    parse_relationships(&["organizations._id:tickets.organization_id"]).unwrap()
}

#[test]
fn test_join_returns_org_and_its_tickets() {
    let mut db = JsonDb::new();
    db.load(
        "orgs",
        JsonValue::parse(r#"[{"_id": 101, "name": "Acme"}]"#).unwrap(),
    )
    .unwrap();
    db.load(
        "tickets",
        JsonValue::parse(r#"[{"_id": "t1", "organization_id": 101}]"#).unwrap(),
    )
    .unwrap();
    let relationships = parse_relationships(&["orgs._id:tickets.organization_id"]).unwrap();

    let results = db
        .search_related("orgs", "_id", "101", &relationships)
        .unwrap();
    assert_ids(&results, &["101", "t1"]);
}

#[test]
fn test_join_scans_unindexed_related_documents() {
    let db = sample_db();
    db.build_index("organizations", "_id").unwrap();

    let results = db
        .search_related("organizations", "_id", "101", &org_tickets())
        .unwrap();

    // Primary from the index first, then every ticket from the scan
    assert_eq!(results.len(), 3);
    assert_eq!(ids(&results[..1]), vec!["101"]);
    assert_ids(
        &results,
        &[
            "101",
            "436bf9b0-1147-4c0a-8439-6f79833bff5b",
            "1a227508-9f39-427c-8f57-1b72f3fab87c",
        ],
    );
}

#[test]
fn test_join_from_the_right_side() {
    let db = sample_db();

    let results = db
        .search_related("tickets", "organization_id", "105", &org_tickets())
        .unwrap();
    assert_ids(
        &results,
        &["105", "2217c7dc-7371-4401-8738-0a8a8aedc08d"],
    );
}

#[test]
fn test_unrelated_pairs_are_not_joined() {
    let db = sample_db();

    // name is not part of any relationship
    let results = db
        .search_related("organizations", "name", "Acme", &org_tickets())
        .unwrap();
    assert_ids(&results, &["105"]);
}

#[test]
fn test_chained_relationships_fan_out_once() {
    let db = sample_db();
    let relationships = parse_relationships(&[
        "organizations._id:tickets.organization_id",
        "organizations._id:users.organization_id",
        "tickets.organization_id:organizations._id",
    ])
    .unwrap();

    let results = db
        .search_related("organizations", "_id", "105", &relationships)
        .unwrap();
    assert_ids(
        &results,
        &["105", "2217c7dc-7371-4401-8738-0a8a8aedc08d", "71"],
    );
}

#[test]
fn test_related_value_under_another_key_contributes_nothing() {
    let mut db = sample_db();
    // 105 appears here only as a submitter_id and inside a list
    db.load(
        "audits",
        JsonValue::parse(
            r#"[{"_id": "a1", "submitter_id": 105, "refs": [105]}, {"_id": "a2", "organization_id": 101}]"#,
        )
        .unwrap(),
    )
    .unwrap();
    let relationships =
        parse_relationships(&["organizations._id:audits.organization_id"]).unwrap();

    let results = db
        .search_related("organizations", "_id", "105", &relationships)
        .unwrap();
    assert_ids(&results, &["105"]);
}

#[test]
fn test_same_document_relationship_yields_each_record_once() {
    let mut db = JsonDb::new();
    db.load(
        "orgs",
        JsonValue::parse(r#"[{"_id": 1, "parent_id": 1}, {"_id": 2, "parent_id": 1}]"#).unwrap(),
    )
    .unwrap();
    let relationships = parse_relationships(&["orgs._id:orgs.parent_id"]).unwrap();

    let results = db.search_related("orgs", "_id", "1", &relationships).unwrap();
    assert_eq!(results.len(), 2);
    assert_ids(&results, &["1", "2"]);
}

#[test]
fn test_join_with_nothing_anywhere() {
    let db = sample_db();
    assert!(matches!(
        db.search_related("organizations", "_id", "404", &org_tickets()),
        Err(JsonSearchError::KeyValueNotFound { .. })
    ));
}

#[test]
fn test_join_tolerates_missing_related_document() {
    let db = sample_db();
    let relationships = parse_relationships(&["organizations._id:archive.organization_id"]).unwrap();

    let results = db
        .search_related("organizations", "_id", "106", &relationships)
        .unwrap();
    assert_ids(&results, &["106"]);
}

#[test]
fn test_join_unknown_primary_document() {
    let db = sample_db();
    assert!(matches!(
        db.search_related("archive", "_id", "1", &org_tickets()),
        Err(JsonSearchError::UnknownDocument(_))
    ));
}

#[test]
fn test_malformed_relationships_rejected() {
    for text in ["organizations._id", "organizations:tickets", ":tickets.id", "a.b:c.d:e.f"] {
        assert!(
            matches!(
                parse_relationships(&[text]),
                Err(JsonSearchError::MalformedRelationship(_))
            ),
            "accepted '{text}'"
        );
    }
}
