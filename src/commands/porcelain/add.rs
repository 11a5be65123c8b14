use crate::areas::repository::Repository;
use crate::errors::{RepositoryError, RepositoryResult};
use std::path::{Path, PathBuf};

impl Repository {
    /// Stage the current content of every path, expanding directories to
    /// the files below them.
    ///
    /// Stops at the first path missing from the working directory with
    /// `FileNotFound`; entries staged before it are kept and persisted.
    pub fn add<S: AsRef<Path>>(&mut self, paths: &[S]) -> RepositoryResult<()> {
        self.ensure_initialized()?;

        let staged = self.stage_paths(paths);
        self.index_mut().write_updates()?;

        let staged = staged?;
        tracing::info!(staged, "add completed");

        Ok(())
    }

    fn stage_paths<S: AsRef<Path>>(&mut self, paths: &[S]) -> RepositoryResult<usize> {
        let mut staged = 0;

        for path in paths {
            for file_path in self.expanded_file_list(path.as_ref())? {
                let content = self.workspace().read_file(&file_path)?;
                tracing::debug!(path = %file_path.display(), "staging");
                self.index_mut().add(file_path, content);
                staged += 1;
            }
        }

        Ok(staged)
    }

    fn expanded_file_list(&self, path: &Path) -> RepositoryResult<Vec<PathBuf>> {
        let relative_path = self.workspace().relative_path(path)?;

        if self.workspace().is_dir(&relative_path) {
            self.workspace().list_files(Some(&relative_path))
        } else if self.workspace().is_file(&relative_path) {
            Ok(vec![relative_path])
        } else {
            Err(RepositoryError::FileNotFound(path.to_path_buf()))
        }
    }
}
