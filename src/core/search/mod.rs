//! Point queries over loaded documents.
//!
//! The engine answers single-document `key == value` queries, preferring
//! a built index and otherwise scanning the whole tree. The resolver
//! layers relationship joins on top, fanning one query out to every
//! related `(document, key)` pair.

mod engine;
mod resolver;

pub use engine::{scan, search};
pub use resolver::search_related;
