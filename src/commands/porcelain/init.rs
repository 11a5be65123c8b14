use crate::areas::repository::Repository;
use crate::artifacts::branch::head::Head;
use crate::errors::RepositoryResult;
use std::fs;

impl Repository {
    /// Create the storage layout under `.git`.
    ///
    /// HEAD starts attached to `master`, which stays unborn until the first
    /// commit. Running `init` again keeps whatever state already exists.
    pub fn init(&mut self) -> RepositoryResult<()> {
        fs::create_dir_all(self.database().commits_path())?;
        fs::create_dir_all(self.refs().branches_path())?;

        // create the index file if it does not exist
        if !self.index().path().exists() {
            fs::write(self.index().path(), b"")?;
        }

        if self.refs().read_head()?.is_none() {
            self.set_head(Head::default())?;
        }

        tracing::info!(path = %self.path().display(), "initialized repository");

        Ok(())
    }
}
