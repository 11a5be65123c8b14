use crate::areas::repository::Repository;
use crate::artifacts::branch::HEAD_REF_NAME;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};

impl Repository {
    /// Create a branch pointing at the HEAD commit.
    ///
    /// HEAD itself does not move. Fails with `InvalidRevision` while HEAD is
    /// unborn, since there is no commit to point at yet.
    pub fn branch_create(&mut self, branch_name: &str) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let head_oid = self
            .head_oid()?
            .ok_or_else(|| RepositoryError::InvalidRevision(HEAD_REF_NAME.to_string()))?;

        self.refs().create_branch(&branch_name, &head_oid)?;
        tracing::info!(branch = %branch_name, commit = %head_oid, "created branch");

        Ok(head_oid)
    }

    /// Delete a branch and return the commit it pointed at.
    ///
    /// Deleting the branch HEAD is attached to leaves HEAD unborn.
    pub fn branch_remove(&mut self, branch_name: &str) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let oid = self.refs().delete_branch(&branch_name)?;

        if self.head().branch() == Some(&branch_name) {
            tracing::warn!(branch = %branch_name, "removed the current branch");
        }
        tracing::info!(branch = %branch_name, commit = %oid, "removed branch");

        Ok(oid)
    }

    /// All branch names, sorted
    pub fn show_branches(&self) -> RepositoryResult<Vec<BranchName>> {
        self.ensure_initialized()?;

        Ok(self.refs().list_branches()?.into_iter().collect())
    }
}
