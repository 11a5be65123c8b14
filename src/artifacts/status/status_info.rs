use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::errors::RepositoryResult;
use derive_new::new;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub type FileSet = BTreeSet<PathBuf>;

/// Result of `status`. The four sets are disjoint and iterate in
/// lexicographic order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub head: Head,
    /// Staged paths that the HEAD snapshot does not contain
    pub ready_to_commit: FileSet,
    /// HEAD snapshot paths whose on-disk content differs
    pub modified: FileSet,
    /// HEAD snapshot paths missing from disk
    pub removed: FileSet,
    /// On-disk paths neither staged nor recorded by HEAD or any ancestor
    pub untracked: FileSet,
}

impl StatusInfo {
    /// Nothing to report: "everything up to date"
    pub fn is_clean(&self) -> bool {
        self.ready_to_commit.is_empty()
            && self.modified.is_empty()
            && self.removed.is_empty()
            && self.untracked.is_empty()
    }
}

#[derive(new)]
pub struct Status<'r> {
    repository: &'r Repository,
}

impl Status<'_> {
    pub fn initialize(&self) -> RepositoryResult<StatusInfo> {
        let head_snapshot = self.repository.head_snapshot()?;
        let index = self.repository.index();
        let workspace_files = self
            .repository
            .workspace()
            .list_files(None)?
            .into_iter()
            .collect::<FileSet>();

        let ready_to_commit = index
            .paths()
            .filter(|path| !head_snapshot.contains_key(*path))
            .cloned()
            .collect::<FileSet>();

        let mut modified = FileSet::new();
        let mut removed = FileSet::new();
        for (path, content) in &head_snapshot {
            if !workspace_files.contains(path) {
                removed.insert(path.clone());
            } else if self.differs_on_disk(path, content)? {
                modified.insert(path.clone());
            }
        }

        let ever_tracked = self.ancestor_paths()?;
        let untracked = workspace_files
            .into_iter()
            .filter(|path| !index.contains(path) && !ever_tracked.contains(path))
            .collect::<FileSet>();

        Ok(StatusInfo {
            head: self.repository.head().clone(),
            ready_to_commit,
            modified,
            removed,
            untracked,
        })
    }

    fn differs_on_disk(&self, path: &Path, content: &str) -> RepositoryResult<bool> {
        Ok(self.repository.workspace().read_file(path)? != content)
    }

    /// Every path recorded by the HEAD commit or any of its ancestors
    fn ancestor_paths(&self) -> RepositoryResult<FileSet> {
        let mut paths = FileSet::new();

        if let Some(head_oid) = self.repository.head_oid()? {
            for entry in self.repository.database().walk_parents(head_oid) {
                let (_, commit) = entry?;
                paths.extend(commit.into_snapshot().into_keys());
            }
        }

        Ok(paths)
    }
}

