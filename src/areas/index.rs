//! Staging index
//!
//! The index maps repository-relative paths to the file content queued for
//! the next commit. It is persisted to `.git/index` after every mutating
//! engine operation and cleared once a commit succeeds.
//!
//! ## Index File Format
//!
//! One `<path>:<content>` line per staged file, sorted by path, with both
//! halves escaped by [`crate::artifacts::core::escape`].

use crate::artifacts::core::{escape, split_field};
use crate::artifacts::objects::commit::Snapshot;
use crate::errors::{RepositoryError, RepositoryResult};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

const FIELD_SEPARATOR: &str = ":";

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `.git/index`)
    path: Box<Path>,
    /// Staged content mapped by path
    entries: BTreeMap<PathBuf, String>,
    /// Flag indicating if the index has been modified since loading
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk; a missing file means an empty index
    pub fn rehydrate(&mut self) -> RepositoryResult<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)?;
        for line in content.lines().filter(|line| !line.is_empty()) {
            let (path, data) = split_field(line, FIELD_SEPARATOR).ok_or_else(|| {
                RepositoryError::CorruptedData {
                    path: self.path.to_path_buf(),
                    reason: format!("malformed index line '{line}'"),
                }
            })?;
            self.entries.insert(PathBuf::from(path), data);
        }

        Ok(())
    }

    /// Persist the index if it changed since it was loaded or last written
    pub fn write_updates(&mut self) -> RepositoryResult<()> {
        if !self.changed {
            return Ok(());
        }

        let content = self
            .entries
            .iter()
            .map(|(path, data)| {
                format!(
                    "{}{FIELD_SEPARATOR}{}\n",
                    escape(&path.to_string_lossy()),
                    escape(data)
                )
            })
            .collect::<String>();

        std::fs::write(&self.path, content)?;
        self.changed = false;
        tracing::debug!(entries = self.entries.len(), "wrote index");

        Ok(())
    }

    /// Stage `content` for `path`, overwriting any earlier entry
    pub fn add(&mut self, path: PathBuf, content: String) {
        self.entries.insert(path, content);
        self.changed = true;
    }

    /// Unstage `path`; returns whether it was staged
    pub fn remove(&mut self, path: &Path) -> bool {
        let removed = self.entries.remove(path).is_some();
        self.changed |= removed;
        removed
    }

    pub fn clear(&mut self) {
        if !self.entries.is_empty() {
            self.entries.clear();
            self.changed = true;
        }
    }

    /// Replace every entry with the content of `snapshot`
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.entries = snapshot;
        self.changed = true;
    }

    pub fn entry_by_path(&self, path: &Path) -> Option<&str> {
        self.entries.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.entries.contains_key(path)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&PathBuf, &String)> {
        self.entries.iter()
    }

    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.entries.keys()
    }
}
