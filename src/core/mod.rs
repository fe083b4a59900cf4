//! Core domain logic (adapter-agnostic)
//!
//! Everything here is independent of how the engine is driven; the
//! CLI in `cli/` is one adapter on top of it.
//!
//! # Architecture
//!
//! - **value**: JSON value model
//! - **store**: Named document registry
//! - **matcher**: Key and key/value tree matching
//! - **index**: Per-key value indexes
//! - **relationship**: `doc.key` references and joins
//! - **search**: Single-document and related-document search
//! - **db**: `JsonDb` facade over store, indexes and search
//! - **loader**: Reading documents from the file system
//! - **config**: Configuration loading (TOML + environment)
//! - **services**: Unified service container

pub mod config;
pub mod db;
pub mod error;
pub mod index;
pub mod loader;
pub mod matcher;
pub mod relationship;
pub mod search;
pub mod services;
pub mod store;
pub mod value;
pub mod xdg;

// Re-export key types for convenience
pub use config::Config;
pub use db::JsonDb;
pub use error::{JsonSearchError, Result};
pub use relationship::{KeyRef, Relationship};
pub use services::Services;
pub use value::JsonValue;
