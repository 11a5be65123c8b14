use crate::areas::repository::Repository;
use crate::artifacts::branch::branch_name::BranchName;
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::RepositoryResult;

impl Repository {
    /// Overlay the tip snapshot of `branch_name` onto the working directory
    /// and the index, then commit the result.
    ///
    /// Every file of the branch overwrites the local copy and files the
    /// branch lacks are left alone. There is no merge base and no conflict
    /// detection. The merge commit's only parent is the previous HEAD.
    pub fn merge(&mut self, branch_name: &str) -> RepositoryResult<ObjectId> {
        self.ensure_initialized()?;

        let branch_name = BranchName::try_parse(branch_name.to_string())?;
        let tip_oid = self.refs().read_branch(&branch_name)?;
        let snapshot = self.database().load(&tip_oid)?.into_snapshot();

        for (path, content) in snapshot {
            self.workspace().write_file(&path, &content)?;
            self.index_mut().add(path, content);
        }
        self.index_mut().write_updates()?;

        let merge_oid = self.commit(&format!("Merge branch {branch_name}"))?;
        tracing::info!(branch = %branch_name, from = %tip_oid, commit = %merge_oid, "merged");

        Ok(merge_oid)
    }
}
