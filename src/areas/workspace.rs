use crate::errors::{RepositoryError, RepositoryResult};
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

const GIT_DIR: &str = ".git";

/// The working directory: every file under the repository root except the
/// private `.git` storage directory.
#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Turn a user-supplied path into a repository-relative one.
    ///
    /// Absolute paths must lie inside the root. Paths that leave the root or
    /// point into `.git` are reported as not found.
    pub fn relative_path(&self, path: &Path) -> RepositoryResult<PathBuf> {
        let not_found = || RepositoryError::FileNotFound(path.to_path_buf());
        let relative = if path.is_absolute() {
            path.strip_prefix(&self.path).map_err(|_| not_found())?
        } else {
            path
        };

        let mut normalized = PathBuf::new();
        for component in relative.components() {
            match component {
                Component::CurDir => {}
                Component::Normal(name) => normalized.push(name),
                _ => return Err(not_found()),
            }
        }

        if Self::is_ignored(&normalized) {
            return Err(not_found());
        }

        Ok(normalized)
    }

    /// All files in the working directory, relative to the root and sorted
    pub fn list_files(&self, root_file_path: Option<&Path>) -> RepositoryResult<Vec<PathBuf>> {
        let root_file_path = match root_file_path {
            Some(p) => self.path.join(p),
            None => self.path.to_path_buf(),
        };

        let mut files = Vec::new();
        let walker = WalkDir::new(&root_file_path)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| entry.file_name() != GIT_DIR);

        for entry in walker {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            if let Ok(relative_path) = entry.path().strip_prefix(&self.path) {
                files.push(relative_path.to_path_buf());
            }
        }

        Ok(files)
    }

    pub fn is_file(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_file()
    }

    pub fn is_dir(&self, file_path: &Path) -> bool {
        self.path.join(file_path).is_dir()
    }

    /// Read a file as text. Invalid UTF-8 sequences are replaced with
    /// U+FFFD, so binary files can still be staged and compared.
    pub fn read_file(&self, file_path: &Path) -> RepositoryResult<String> {
        let data = match std::fs::read(self.path.join(file_path)) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RepositoryError::FileNotFound(file_path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        match String::from_utf8(data) {
            Ok(content) => Ok(content),
            Err(e) => {
                tracing::warn!(path = %file_path.display(), "not valid UTF-8, decoding lossily");
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    /// Write a file, creating missing parent directories
    pub fn write_file(&self, file_path: &Path, content: &str) -> RepositoryResult<()> {
        let path = self.path.join(file_path);

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Delete a file if present, then drop any directories it leaves empty
    pub fn remove_file(&self, file_path: &Path) -> RepositoryResult<()> {
        let path = self.path.join(file_path);

        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(e.into()),
        }

        self.prune_empty_parent_dirs(&path)
    }

    fn prune_empty_parent_dirs(&self, path: &Path) -> RepositoryResult<()> {
        if let Some(parent) = path.parent()
            && parent != self.path.as_ref()
            && parent.starts_with(&self.path)
            && parent.read_dir()?.next().is_none()
        {
            std::fs::remove_dir(parent)?;
            self.prune_empty_parent_dirs(parent)?;
        }

        Ok(())
    }

    fn is_ignored(path: &Path) -> bool {
        path.components().next() == Some(Component::Normal(GIT_DIR.as_ref()))
    }
}
