use crate::areas::database::Database;
use crate::areas::index::Index;
use crate::areas::refs::Refs;
use crate::areas::workspace::Workspace;
use crate::artifacts::branch::head::Head;
use crate::artifacts::branch::revision::{Revision, RevisionContext};
use crate::artifacts::objects::commit::Snapshot;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub const GIT_DIR: &str = ".git";

/// The repository engine.
///
/// Owns the HEAD state and the staging index, and coordinates the commit
/// store, the branch registry and the working directory. All state changes
/// go through `&mut self` methods; the porcelain commands live in
/// `crate::commands::porcelain`.
pub struct Repository {
    path: Box<Path>,
    index: Index,
    database: Database,
    workspace: Workspace,
    refs: Refs,
    head: Head,
}

impl Repository {
    /// Open the repository rooted at `path`, loading HEAD and the index if
    /// they exist. The directory does not have to be initialized yet.
    pub fn new(path: impl AsRef<Path>) -> RepositoryResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            std::fs::create_dir_all(path)?;
        }
        let path = path.canonicalize()?;
        let git_path = path.join(GIT_DIR);

        let mut index = Index::new(git_path.join("index").into_boxed_path());
        let database = Database::new(git_path.join("commits").into_boxed_path());
        let workspace = Workspace::new(path.clone().into_boxed_path());
        let refs = Refs::new(git_path.clone().into_boxed_path());

        let head = refs.read_head()?.unwrap_or_default();
        index.rehydrate()?;

        Ok(Repository {
            path: path.into_boxed_path(),
            index,
            database,
            workspace,
            refs,
            head,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn git_path(&self) -> PathBuf {
        self.path.join(GIT_DIR)
    }

    pub fn index(&self) -> &Index {
        &self.index
    }

    pub(crate) fn index_mut(&mut self) -> &mut Index {
        &mut self.index
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn head(&self) -> &Head {
        &self.head
    }

    pub fn revisions(&'_ self) -> RevisionContext<'_> {
        RevisionContext::new(&self.database, &self.refs)
    }

    pub(crate) fn ensure_initialized(&self) -> RepositoryResult<()> {
        if self.git_path().is_dir() {
            Ok(())
        } else {
            Err(RepositoryError::NotInitialized(self.path.to_path_buf()))
        }
    }

    /// The commit HEAD currently points at; None while the attached branch
    /// has no commits yet
    pub fn head_oid(&self) -> RepositoryResult<Option<ObjectId>> {
        match &self.head {
            Head::Attached(branch_name) => match self.refs.read_branch(branch_name) {
                Ok(oid) => Ok(Some(oid)),
                Err(RepositoryError::BranchMissing(_)) => Ok(None),
                Err(e) => Err(e),
            },
            Head::Detached(oid) => Ok(Some(oid.clone())),
        }
    }

    /// Snapshot of the HEAD commit, empty when there are no commits yet
    pub fn head_snapshot(&self) -> RepositoryResult<Snapshot> {
        match self.head_oid()? {
            Some(oid) => Ok(self.database.load(&oid)?.into_snapshot()),
            None => Ok(Snapshot::new()),
        }
    }

    pub fn resolve(&self, revision: &Revision) -> RepositoryResult<ObjectId> {
        self.revisions()
            .resolve(revision, self.head_oid()?.as_ref())
    }

    pub(crate) fn set_head(&mut self, head: Head) -> RepositoryResult<()> {
        self.refs.write_head(&head)?;
        self.head = head;

        Ok(())
    }

    /// Move HEAD to `oid` without changing the attach state: an attached
    /// HEAD advances its branch, a detached HEAD moves on its own.
    pub(crate) fn move_head(&mut self, oid: &ObjectId) -> RepositoryResult<()> {
        match &self.head {
            Head::Attached(branch_name) => self.refs.update_branch(branch_name, oid),
            Head::Detached(_) => self.set_head(Head::Detached(oid.clone())),
        }
    }

    /// Replace the tracked working files and the index with `snapshot`.
    ///
    /// Files tracked by HEAD or staged in the index are deleted first, then
    /// every snapshot entry is written. Untracked files are left alone.
    pub(crate) fn materialize(&mut self, snapshot: Snapshot) -> RepositoryResult<()> {
        let tracked = self
            .head_snapshot()?
            .into_keys()
            .chain(self.index.paths().cloned())
            .collect::<BTreeSet<_>>();

        for path in &tracked {
            self.workspace.remove_file(path)?;
        }
        for (path, content) in &snapshot {
            self.workspace.write_file(path, content)?;
        }
        tracing::debug!(
            removed = tracked.len(),
            written = snapshot.len(),
            "materialized snapshot"
        );

        self.index.replace(snapshot);
        self.index.write_updates()
    }
}
