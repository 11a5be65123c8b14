use crate::areas::repository::Repository;
use crate::artifacts::status::{Status, StatusInfo};
use crate::errors::RepositoryResult;

impl Repository {
    /// Classify the working directory against the index and the HEAD
    /// snapshot
    pub fn status(&self) -> RepositoryResult<StatusInfo> {
        self.ensure_initialized()?;

        let status_info = Status::new(self).initialize()?;
        tracing::info!(
            ready_to_commit = status_info.ready_to_commit.len(),
            modified = status_info.modified.len(),
            removed = status_info.removed.len(),
            untracked = status_info.untracked.len(),
            "computed status"
        );

        Ok(status_info)
    }
}
