//! Commit store
//!
//! Append-only, content-keyed persistence of commit records. Each record
//! lives in its own file, `.git/commits/<id>`, and is never rewritten once
//! stored. Nothing is cached: every lookup goes back to disk.

use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use fake::rand;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn commits_path(&self) -> &Path {
        &self.path
    }

    /// Write a commit record and return its id.
    ///
    /// Storing a commit whose id already exists is a no-op.
    pub fn store(&self, commit: &Commit) -> RepositoryResult<ObjectId> {
        let commit_id = commit.object_id();
        let commit_path = self.commit_path(&commit_id);

        if commit_path.exists() {
            tracing::debug!(commit = %commit_id, "commit already stored");
            return Ok(commit_id);
        }

        std::fs::create_dir_all(&self.path)?;
        self.write_commit(commit_path, commit.serialize())?;
        tracing::debug!(commit = %commit_id, parent = ?commit.parent(), "stored commit");

        Ok(commit_id)
    }

    pub fn load(&self, commit_id: &ObjectId) -> RepositoryResult<Commit> {
        let commit_path = self.commit_path(commit_id);

        let content = match std::fs::read_to_string(&commit_path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::CommitNotFound(commit_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Commit::deserialize(&content, &commit_path)
    }

    pub fn contains(&self, commit_id: &ObjectId) -> bool {
        self.commit_path(commit_id).is_file()
    }

    /// Lazily walk `parent` links starting at (and including) `start`.
    ///
    /// Each call starts a fresh walk that reads the store as it goes.
    pub fn walk_parents(&self, start: ObjectId) -> RevList<'_> {
        RevList::new(self, Some(start))
    }

    fn commit_path(&self, commit_id: &ObjectId) -> PathBuf {
        self.path.join(commit_id.as_ref())
    }

    fn write_commit(&self, commit_path: PathBuf, content: String) -> RepositoryResult<()> {
        let temp_commit_path = self.path.join(Self::generate_temp_name());

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_commit_path)?;
        file.write_all(content.as_bytes())?;

        // the record only appears under its id once fully written
        std::fs::rename(&temp_commit_path, &commit_path)?;

        Ok(())
    }

    fn generate_temp_name() -> String {
        format!("tmp-commit-{}", rand::random::<u32>())
    }
}
