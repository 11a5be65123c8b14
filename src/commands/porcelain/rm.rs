use crate::areas::repository::Repository;
use crate::errors::RepositoryResult;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

impl Repository {
    /// Unstage every path and delete it from the working directory.
    ///
    /// Directories expand to the files below them, on disk and in the index.
    /// Paths that are neither staged nor present on disk are ignored. A
    /// deleted file that the HEAD snapshot tracks is dropped from the next
    /// commit's snapshot.
    pub fn rm<S: AsRef<Path>>(&mut self, paths: &[S]) -> RepositoryResult<()> {
        self.ensure_initialized()?;

        for path in paths {
            for file_path in self.removal_targets(path.as_ref())? {
                let unstaged = self.index_mut().remove(&file_path);
                self.workspace().remove_file(&file_path)?;
                tracing::debug!(path = %file_path.display(), unstaged, "removed");
            }
        }

        self.index_mut().write_updates()?;
        tracing::info!(count = paths.len(), "rm completed");

        Ok(())
    }

    fn removal_targets(&self, path: &Path) -> RepositoryResult<BTreeSet<PathBuf>> {
        let relative_path = self.workspace().relative_path(path)?;

        if !self.workspace().is_dir(&relative_path) {
            return Ok(BTreeSet::from([relative_path]));
        }

        let mut targets = self
            .workspace()
            .list_files(Some(&relative_path))?
            .into_iter()
            .collect::<BTreeSet<_>>();
        targets.extend(
            self.index()
                .paths()
                .filter(|staged| staged.starts_with(&relative_path))
                .cloned(),
        );

        Ok(targets)
    }
}
