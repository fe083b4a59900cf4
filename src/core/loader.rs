//! Loading JSON documents from the file system.
//!
//! A document's name is its file stem: `data/organizations.json` loads
//! as `organizations`. Directories are walked recursively and filtered
//! with glob patterns; hidden entries and oversized files are skipped.

use crate::core::db::JsonDb;
use crate::core::error::{JsonSearchError, Result};
use crate::core::value::JsonValue;
use glob::Pattern;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directory walker selecting JSON document files
pub struct DocumentLoader {
    /// Patterns to include (e.g., "*.json")
    include_patterns: Vec<Pattern>,

    /// Maximum file size in bytes (skip larger files)
    max_file_size_bytes: u64,
}

impl DocumentLoader {
    /// Create a new loader
    ///
    /// # Arguments
    ///
    /// * `include_patterns` - Glob patterns for files to include
    /// * `max_file_size_mb` - Maximum file size in megabytes
    pub fn new(include_patterns: Vec<String>, max_file_size_mb: usize) -> Result<Self> {
        let include = include_patterns
            .into_iter()
            .map(|p| {
                Pattern::new(&p).map_err(|e| {
                    JsonSearchError::ConfigError(format!("Invalid include pattern '{p}': {e}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            include_patterns: include,
            max_file_size_bytes: (max_file_size_mb as u64) * 1024 * 1024,
        })
    }

    /// Collect matching files below `root`, sorted by path
    pub fn collect_files(&self, root: &Path) -> Result<Vec<PathBuf>> {
        if !root.is_dir() {
            return Err(JsonSearchError::InvalidPath(format!(
                "Not a directory: {}",
                root.display()
            )));
        }

        let mut files = Vec::new();

        for entry in WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| Self::should_process_entry(e, root))
        {
            match entry {
                Ok(entry) => {
                    if !entry.file_type().is_file() {
                        continue;
                    }

                    let path = entry.path();

                    if let Ok(metadata) = entry.metadata() {
                        if metadata.len() > self.max_file_size_bytes {
                            tracing::warn!(
                                "Skipping large file: {:?} ({} bytes)",
                                path,
                                metadata.len()
                            );
                            continue;
                        }
                    }

                    if self.matches_patterns(path) {
                        files.push(path.to_path_buf());
                    }
                }
                Err(e) => {
                    tracing::warn!("Walk error: {}", e);
                }
            }
        }

        files.sort();
        Ok(files)
    }

    /// Skip hidden files and directories, never the root itself
    fn should_process_entry(entry: &DirEntry, root: &Path) -> bool {
        if entry.path() == root {
            return true;
        }

        !entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.starts_with('.'))
    }

    fn matches_patterns(&self, path: &Path) -> bool {
        if self.include_patterns.is_empty() {
            return true;
        }

        let path_str = match path.to_str() {
            Some(s) => s,
            None => return false,
        };

        // Match against both full path and filename
        self.include_patterns.iter().any(|p| {
            p.matches(path_str)
                || path
                    .file_name()
                    .and_then(|f| f.to_str())
                    .is_some_and(|f| p.matches(f))
        })
    }
}

/// Document name for a file: its stem
pub fn document_name(path: &Path) -> Result<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| {
            JsonSearchError::InvalidPath(format!("Cannot name document for {}", path.display()))
        })
}

/// Read, parse and register one file. Returns the document name.
pub fn load_file(db: &mut JsonDb, path: &Path) -> Result<String> {
    let name = document_name(path)?;
    let contents = fs::read_to_string(path).map_err(|e| {
        JsonSearchError::InvalidPath(format!("Failed to read {}: {e}", path.display()))
    })?;
    let root = JsonValue::parse(&contents)?;

    db.load(name.clone(), root)?;
    tracing::info!("Loaded document '{}' from {}", name, path.display());
    Ok(name)
}

/// Load every path once, in order. Returns the loaded document names.
pub fn load_files(db: &mut JsonDb, paths: &[PathBuf]) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for path in paths {
        if !seen.insert(path.as_path()) {
            continue;
        }
        names.push(load_file(db, path)?);
    }

    Ok(names)
}
