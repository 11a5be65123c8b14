use crate::areas::repository::Repository;
use crate::artifacts::objects::commit::{Commit, Snapshot, commit_timestamp};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{RepositoryError, RepositoryResult};

impl Repository {
    /// Record the staged changes as a new commit on top of HEAD.
    ///
    /// The new snapshot is the HEAD snapshot without the files deleted from
    /// the working directory, overlaid with the index. HEAD advances to the
    /// new commit (through its branch when attached) and the index is
    /// cleared. Fails with `EmptyIndex` before touching the store when
    /// nothing is staged.
    pub fn commit(&mut self, message: &str) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        if self.index().is_empty() {
            return Err(RepositoryError::EmptyIndex);
        }

        let parent = self.head_oid()?;
        let snapshot = self.next_snapshot()?;
        let commit = Commit::new(
            parent,
            message.to_string(),
            commit_timestamp(),
            snapshot,
        );

        let commit_id = self.database().store(&commit)?;
        self.move_head(&commit_id)?;

        self.index_mut().clear();
        self.index_mut().write_updates()?;

        tracing::info!(
            commit = %commit_id,
            message = commit.short_message(),
            head = %self.head().to_ref_string(),
            files = commit.snapshot().len(),
            "created commit"
        );

        Ok(commit_id)
    }

    fn next_snapshot(&self) -> RepositoryResult<Snapshot> {
        let mut snapshot = self.head_snapshot()?;

        snapshot.retain(|path, _| self.workspace().is_file(path));
        snapshot.extend(
            self.index()
                .entries()
                .map(|(path, content)| (path.clone(), content.clone())),
        );

        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use crate::artifacts::branch::branch_name::BranchName;
    use crate::artifacts::objects::commit::Snapshot;
    use crate::commands::porcelain::fixtures::{TestRepository, repository};
    use crate::errors::RepositoryError;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    fn test_commit_records_snapshot_and_moves_branch(mut repository: TestRepository) {
        let oid = repository.commit_file("a.txt", "1", "m1");

        let commit = repository.repository.database().load(&oid).unwrap();
        assert_eq!(commit.message(), "m1");
        assert_eq!(commit.parent(), None);
        assert_eq!(
            commit.snapshot(),
            &Snapshot::from([(PathBuf::from("a.txt"), "1".to_string())])
        );
        assert_eq!(
            repository
                .repository
                .refs()
                .read_branch(&BranchName::default_branch())
                .unwrap(),
            oid
        );
        assert!(repository.reopen().index().is_empty());
    }

    #[rstest]
    fn test_commit_links_parent_and_keeps_earlier_files(mut repository: TestRepository) {
        let first = repository.commit_file("a.txt", "1", "m1");
        let second = repository.commit_file("b.txt", "2", "m2");

        let commit = repository.repository.database().load(&second).unwrap();
        assert_eq!(commit.parent(), Some(&first));
        assert_eq!(commit.snapshot().len(), 2);
    }

    #[rstest]
    fn test_commit_keeps_message_verbatim(mut repository: TestRepository) {
        let oid = repository.commit_file("a.txt", "1", "  spaced message\n");

        let commit = repository.repository.database().load(&oid).unwrap();

        assert_eq!(commit.message(), "  spaced message\n");
    }

    #[rstest]
    fn test_commit_with_empty_index_fails(mut repository: TestRepository) {
        let result = repository.repository.commit("nothing");

        assert!(matches!(result, Err(RepositoryError::EmptyIndex)));
        assert_eq!(
            std::fs::read_dir(repository.dir.path().join(".git/commits"))
                .unwrap()
                .count(),
            0
        );
    }

    #[rstest]
    fn test_commit_on_detached_head_moves_only_head(mut repository: TestRepository) {
        let first = repository.commit_file("a.txt", "1", "m1");
        let second = repository.commit_file("a.txt", "2", "m2");
        repository.repository.checkout(first.as_ref()).unwrap();

        let detached = repository.commit_file("c.txt", "3", "m3");

        let commit = repository.repository.database().load(&detached).unwrap();
        assert_eq!(commit.parent(), Some(&first));
        assert_eq!(repository.repository.head_oid().unwrap(), Some(detached));
        assert_eq!(
            repository
                .repository
                .refs()
                .read_branch(&BranchName::default_branch())
                .unwrap(),
            second
        );
    }
}
