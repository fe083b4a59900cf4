// Test fixtures: a small organizations/tickets/users data set

use jsonsearch::{JsonDb, JsonValue};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const ORGANIZATIONS: &str = r#"[
  {
    "_id": 101,
    "name": "Enthaze",
    "domain_names": ["kage.com", "ecratic.com"],
    "tags": ["Fulton", "West"],
    "shared_tickets": false
  },
  {
    "_id": 105,
    "name": "Acme",
    "domain_names": ["acme.example"],
    "tags": ["Cherry", "Pine"],
    "shared_tickets": true
  },
  {
    "_id": 106,
    "name": "Zolarex",
    "details": {"region": "Pacific", "employees": 12.9},
    "tags": ["Birch"]
  }
]"#;

#[allow(dead_code)]
pub const TICKETS: &str = r#"[
  {
    "_id": "436bf9b0-1147-4c0a-8439-6f79833bff5b",
    "subject": "A Catastrophe in Korea (North)",
    "organization_id": 101,
    "submitter_id": 38,
    "tags": ["Ohio", "Pennsylvania"]
  },
  {
    "_id": "1a227508-9f39-427c-8f57-1b72f3fab87c",
    "subject": "A Catastrophe in Micronesia",
    "organization_id": 101,
    "submitter_id": 71,
    "tags": ["Puerto Rico", "Idaho"]
  },
  {
    "_id": "2217c7dc-7371-4401-8738-0a8a8aedc08d",
    "subject": "A Problem in Morocco",
    "organization_id": 105,
    "submitter_id": 71,
    "tags": ["Cherry"]
  }
]"#;

#[allow(dead_code)]
pub const USERS: &str = r#"[
  {"_id": 38, "name": "Elma Castro", "organization_id": 101, "active": true},
  {"_id": 71, "name": "Prince Hinton", "organization_id": 105, "active": false}
]"#;

/// The fixture documents written to a temporary directory
#[allow(dead_code)]
pub struct TestData {
    pub dir: TempDir,
}

impl TestData {
    /// organizations.json, tickets.json and users.json
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_files(&[
            ("organizations.json", ORGANIZATIONS),
            ("tickets.json", TICKETS),
            ("users.json", USERS),
        ])
    }

    /// Arbitrary files, relative to the directory
    #[allow(dead_code)]
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        for (path, contents) in files {
            let full_path = dir.path().join(path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent).expect("Failed to create directories");
            }
            std::fs::write(&full_path, contents).expect("Failed to write file");
        }
        Self { dir }
    }

    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    #[allow(dead_code)]
    pub fn file(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }
}

/// The fixture documents loaded straight into a database, unindexed
#[allow(dead_code)]
pub fn sample_db() -> JsonDb {
    let mut db = JsonDb::new();
    for (name, text) in [
        ("organizations", ORGANIZATIONS),
        ("tickets", TICKETS),
        ("users", USERS),
    ] {
        let root = JsonValue::parse(text).expect("fixture is valid JSON");
        db.load(name, root).expect("fixture root is a container");
    }
    db
}
