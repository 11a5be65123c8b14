use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::log::CommitLog;
use crate::artifacts::log::rev_list::RevList;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;

impl Repository {
    /// Walk history from `revision` (HEAD when omitted) to the root.
    ///
    /// The walk is lazy: each summary is read from the store as the
    /// iterator advances. An unborn HEAD yields an empty log.
    pub fn log(&self, revision: Option<&str>) -> RepositoryResult<CommitLog<'_>> {
        self.ensure_initialized()?;

        let start = match revision {
            Some(revision) => Some(self.resolve(&Revision::try_parse(revision)?)?),
            None => self.head_oid()?,
        };
        tracing::debug!(start = ?start, "walking history");

        Ok(CommitLog::new(RevList::new(self.database(), start)))
    }

    /// Resolve any revision specifier to a commit id
    pub fn rev_parse(&self, revision: &str) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        self.resolve(&Revision::try_parse(revision)?)
    }

    /// The commit `generations` parent links behind HEAD
    pub fn relative_revision_from_head(&self, generations: usize) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        self.resolve(&Revision::HeadRelative(generations))
    }
}

#[cfg(test)]
mod tests {
    use crate::artifacts::log::CommitSummary;
    use crate::commands::porcelain::fixtures::{TestRepository, repository};
    use crate::errors::RepositoryError;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn messages(log: impl Iterator<Item = crate::RepositoryResult<CommitSummary>>) -> Vec<String> {
        log.map(|summary| summary.unwrap().message).collect()
    }

    #[rstest]
    fn test_log_walks_child_to_root(mut repository: TestRepository) {
        repository.commit_file("a.txt", "1", "first");
        repository.commit_file("a.txt", "2", "second");
        let third = repository.commit_file("a.txt", "3", "third");

        let log = repository.repository.log(None).unwrap().collect::<Vec<_>>();

        assert_eq!(log.len(), 3);
        assert_eq!(log[0].as_ref().unwrap().oid, third);
        assert_eq!(
            messages(log.into_iter()),
            vec!["third", "second", "first"]
        );
    }

    #[rstest]
    fn test_log_from_revision(mut repository: TestRepository) {
        repository.commit_file("a.txt", "1", "first");
        repository.commit_file("a.txt", "2", "second");

        let log = repository.repository.log(Some("HEAD~1")).unwrap();

        assert_eq!(messages(log), vec!["first"]);
    }

    #[rstest]
    fn test_log_of_unborn_head_is_empty(repository: TestRepository) {
        assert_eq!(repository.repository.log(None).unwrap().count(), 0);
    }

    #[rstest]
    fn test_log_from_unknown_revision_fails(repository: TestRepository) {
        let result = repository.repository.log(Some("ghost"));

        assert!(matches!(result, Err(RepositoryError::InvalidRevision(_))));
    }

    #[rstest]
    fn test_head_relative_zero_is_head(mut repository: TestRepository) {
        let head = repository.commit_file("a.txt", "1", "first");

        assert_eq!(repository.repository.relative_revision_from_head(0).unwrap(), head);
        assert_eq!(repository.repository.rev_parse("HEAD~0").unwrap(), head);
        assert_eq!(repository.repository.rev_parse("@").unwrap(), head);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]
        #[test]
        fn test_head_relative_matches_parent_walk(commits in 1usize..6, generations in 0usize..6) {
            let mut repository = repository();
            let mut oids = Vec::new();
            for i in 0..commits {
                oids.push(repository.commit_file("a.txt", &i.to_string(), &format!("m{i}")));
            }

            let result = repository.repository.relative_revision_from_head(generations);

            if generations < commits {
                prop_assert_eq!(result.unwrap(), oids[commits - 1 - generations].clone());
            } else {
                let is_insufficient = matches!(result, Err(RepositoryError::InsufficientHistory { .. }));
                prop_assert!(is_insufficient);
            }
        }
    }
}
