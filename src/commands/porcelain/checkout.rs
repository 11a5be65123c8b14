use crate::areas::repository::Repository;
use crate::artifacts::branch::HEAD_REF_NAME;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::branch::head::Head;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};
use std::path::Path;

impl Repository {
    /// Switch to `revision`, replacing the index and the tracked working
    /// files with its snapshot.
    ///
    /// A commit id or `HEAD~N` detaches HEAD; a branch name attaches it to
    /// that branch. `HEAD` itself leaves the attach state alone.
    pub fn checkout(&mut self, revision: &str) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        let revision = Revision::try_parse(revision)?;
        let target_oid = self.resolve(&revision)?;
        let snapshot = self.database().load(&target_oid)?.into_snapshot();

        self.materialize(snapshot)?;

        let head = match &revision {
            Revision::Head => None,
            Revision::HeadRelative(_) => Some(Head::Detached(target_oid.clone())),
            Revision::RawId(token) if self.revisions().stored_commit(token).is_some() => {
                Some(Head::Detached(target_oid.clone()))
            }
            // a full-length name that only resolved as a branch
            Revision::RawId(token) => Some(Head::Attached(BranchName::try_parse(token.clone())?)),
            Revision::BranchName(branch_name) => Some(Head::Attached(branch_name.clone())),
        };
        if let Some(head) = head {
            self.set_head(head)?;
        }

        tracing::info!(%revision, commit = %target_oid, head = %self.head().to_ref_string(), "checked out");

        Ok(target_oid)
    }

    /// Restore single files from the HEAD snapshot.
    ///
    /// A path the snapshot does not contain is deleted from the working
    /// directory. The index, the branches and HEAD are not touched. Fails
    /// with `InvalidRevision` while HEAD is unborn.
    pub fn checkout_files<S: AsRef<Path>>(&mut self, paths: &[S]) -> RepositoryResult<()> {
        self.ensure_initialized()?;

        let head_oid = self
            .head_oid()?
            .ok_or_else(|| RepositoryError::InvalidRevision(HEAD_REF_NAME.to_string()))?;
        let snapshot = self.database().load(&head_oid)?.into_snapshot();
        for path in paths {
            let relative_path = self.workspace().relative_path(path.as_ref())?;

            match snapshot.get(&relative_path) {
                Some(content) => self.workspace().write_file(&relative_path, content)?,
                None => self.workspace().remove_file(&relative_path)?,
            }
            tracing::debug!(path = %relative_path.display(), "restored from HEAD");
        }

        tracing::info!(count = paths.len(), "checkout of files completed");

        Ok(())
    }
}
