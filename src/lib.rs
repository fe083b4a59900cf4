//! jsonsearch - in-memory search over JSON documents
//!
//! Load named JSON documents, look up the objects holding a given
//! key/value pair, and join results across documents through declared
//! relationships such as `organizations._id:tickets.organization_id`.
//!
//! # Architecture
//!
//! - **core**: Domain logic
//!   - value, store, matcher (tree model and matching)
//!   - index (value indexes built per `document.key`)
//!   - search (engine and relationship resolver)
//!   - db (the `JsonDb` facade)
//!   - loader, config, xdg, services
//!
//! - **cli**: Command-line adapter (depends on core)
//!
//! # Example
//!
//! ```
//! use jsonsearch::{JsonDb, JsonValue};
//!
//! let mut db = JsonDb::new();
//! let orgs = JsonValue::parse(r#"[{"_id": 101, "name": "Acme"}]"#).unwrap();
//! db.load("organizations", orgs).unwrap();
//! db.build_index("organizations", "_id").unwrap();
//!
//! let found = db.search("organizations", "_id", "101").unwrap();
//! assert_eq!(found.len(), 1);
//! ```

// Core domain logic
pub mod core;

// Command-line adapter
pub mod cli;

// Re-export commonly used types for convenience
pub use core::config::Config;
pub use core::db::JsonDb;
pub use core::error::{JsonSearchError, Result};
pub use core::relationship::{KeyRef, Relationship};
pub use core::services::Services;
pub use core::value::JsonValue;
