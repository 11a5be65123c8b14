//! Repository error types
//!
//! Every engine operation returns a [`RepositoryResult`]. Failures are never
//! retried or rolled back; whatever side effects happened before the failure
//! stay on disk.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// a path passed to `add` does not exist in the working directory
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// commit attempted with nothing staged
    #[error("nothing to commit: the index is empty")]
    EmptyIndex,

    /// the revision names no commit and no branch
    #[error("invalid revision: {0}")]
    InvalidRevision(String),

    /// `HEAD~N` walked past the root commit
    #[error("not enough commits in history: HEAD~{requested} requested, {available} commits reachable")]
    InsufficientHistory { requested: usize, available: usize },

    #[error("branch already exists: {0}")]
    BranchExists(String),

    #[error("branch does not exist: {0}")]
    BranchMissing(String),

    #[error("invalid branch name: {0}")]
    InvalidBranchName(String),

    #[error("commit not found: {0}")]
    CommitNotFound(String),

    #[error("not a repository (no .git directory): {}", .0.display())]
    NotInitialized(PathBuf),

    /// a record on disk could not be parsed
    #[error("corrupted data at {}: {reason}", .path.display())]
    CorruptedData { path: PathBuf, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
