//! Branch registry and HEAD
//!
//! Branches are named pointers to commits, one file per branch under
//! `.git/branches/`, each holding a commit id. Hierarchical names such as
//! `feature/login` become nested directories.
//!
//! `.git/HEAD` holds either `ref: refs/heads/<branch>` (attached) or a raw
//! commit id (detached).

use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use derive_new::new;
use std::collections::BTreeSet;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the storage directory (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// Read `.git/HEAD`, or None when the file does not exist yet
    pub fn read_head(&self) -> RepositoryResult<Option<Head>> {
        let head_path = self.head_path();

        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)?;
        Head::parse(&content, &head_path).map(Some)
    }

    pub fn write_head(&self, head: &Head) -> RepositoryResult<()> {
        std::fs::write(self.head_path(), head.to_ref_string())?;
        tracing::debug!(head = %head.to_ref_string(), "updated HEAD");

        Ok(())
    }

    pub fn branch_exists(&self, name: &BranchName) -> bool {
        self.branches_path().join(name.as_ref()).is_file()
    }

    /// Read the commit a branch points at
    pub fn read_branch(&self, name: &BranchName) -> RepositoryResult<ObjectId> {
        let branch_path = self.branches_path().join(name.as_ref());

        if !branch_path.is_file() {
            return Err(RepositoryError::BranchMissing(name.to_string()));
        }

        let content = std::fs::read_to_string(&branch_path)?;
        ObjectId::try_parse(content.trim().to_string()).map_err(|_| {
            RepositoryError::CorruptedData {
                path: branch_path.clone(),
                reason: format!("branch {name} does not hold a commit id"),
            }
        })
    }

    pub fn create_branch(&self, name: &BranchName, oid: &ObjectId) -> RepositoryResult<()> {
        // check whether another branch with the same name already exists
        if self.branch_exists(name) {
            return Err(RepositoryError::BranchExists(name.to_string()));
        }

        self.update_branch(name, oid)
    }

    /// Point a branch at `oid`, creating it if needed
    pub fn update_branch(&self, name: &BranchName, oid: &ObjectId) -> RepositoryResult<()> {
        let branch_path = self.branches_path().join(name.as_ref());

        if let Some(parent) = branch_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&branch_path, oid.as_ref())?;
        tracing::debug!(branch = %name, commit = %oid, "updated branch");

        Ok(())
    }

    /// Delete a branch and return the commit it pointed at
    pub fn delete_branch(&self, name: &BranchName) -> RepositoryResult<ObjectId> {
        let oid = self.read_branch(name)?;
        let branch_path = self.branches_path().join(name.as_ref());

        std::fs::remove_file(&branch_path)?;
        self.prune_branch_empty_parent_dirs(&branch_path)?;
        tracing::debug!(branch = %name, commit = %oid, "deleted branch");

        Ok(oid)
    }

    pub fn list_branches(&self) -> RepositoryResult<BTreeSet<BranchName>> {
        let branches_path = self.branches_path();

        if !branches_path.exists() {
            return Ok(BTreeSet::new());
        }

        let mut branches = BTreeSet::new();
        for entry in WalkDir::new(&branches_path) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }

            let Ok(relative_path) = entry.path().strip_prefix(&branches_path) else {
                continue;
            };
            match BranchName::try_parse(relative_path.to_string_lossy().to_string()) {
                Ok(name) => {
                    branches.insert(name);
                }
                Err(e) => tracing::warn!(path = %entry.path().display(), "skipping {e}"),
            }
        }

        Ok(branches)
    }

    fn prune_branch_empty_parent_dirs(&self, path: &Path) -> RepositoryResult<()> {
        if let Some(parent) = path.parent()
            && parent != self.branches_path().as_ref()
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)?;
            self.prune_branch_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join("HEAD").into_boxed_path()
    }

    pub fn branches_path(&self) -> Box<Path> {
        self.path.join("branches").into_boxed_path()
    }
}
