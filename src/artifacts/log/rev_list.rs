use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;
use derive_new::new;

/// Lazy walk along `parent` links, child to root.
///
/// Yields the commit id together with the loaded record. A load failure is
/// yielded once and ends the walk.
#[derive(Clone, new)]
pub struct RevList<'d> {
    database: &'d Database,
    current_commit_oid: Option<ObjectId>,
}

impl Iterator for RevList<'_> {
    type Item = RepositoryResult<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let commit_oid = self.current_commit_oid.take()?;

        match self.database.load(&commit_oid) {
            Ok(commit) => {
                // Move to the parent commit for the next iteration
                self.current_commit_oid = commit.parent().cloned();
                Some(Ok((commit_oid, commit)))
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl std::iter::FusedIterator for RevList<'_> {}
