use crate::areas::repository::Repository;
use crate::artifacts::branch::revision::Revision;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;

impl Repository {
    /// Move HEAD to `revision` and restore its snapshot into the index and
    /// the working directory.
    ///
    /// The attach state is kept: an attached HEAD drags its branch along,
    /// a detached HEAD just moves. Abandoned commits stay in the store.
    pub fn reset(&mut self, revision: &str) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        let revision = Revision::try_parse(revision)?;
        let target_oid = self.resolve(&revision)?;
        let snapshot = self.database().load(&target_oid)?.into_snapshot();

        self.materialize(snapshot)?;
        self.move_head(&target_oid)?;

        tracing::info!(%revision, commit = %target_oid, "reset");

        Ok(target_oid)
    }
}
