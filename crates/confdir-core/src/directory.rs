//! Directory based objects.
//!
//! A [`DirectoryBased`] pairs a directory path with the file system adapter
//! used to reach it. Types whose persistent state is a directory embed one by
//! value and build on its initialization step and path helpers.

use crate::error::{ConfdirError, Result};
use crate::tools::fs::FsAdapter;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A directory on some file system.
#[derive(Clone)]
pub struct DirectoryBased {
    fs: Arc<dyn FsAdapter>,
    path: PathBuf,
}

impl DirectoryBased {
    /// Opens the directory at `path`, creating it first if `auto_init` is set.
    ///
    /// # Errors
    ///
    /// - `ConfdirError::NotADirectory` if `path` exists but is something else.
    /// - `ConfdirError::PathNotFound` if `path` is missing and `auto_init` is
    ///   false.
    /// - Adapter errors from creating the directory.
    #[tracing::instrument(skip_all, fields(path = %path.display(), auto_init = auto_init))]
    pub fn open(fs: Arc<dyn FsAdapter>, path: PathBuf, auto_init: bool) -> Result<Self> {
        if fs.exists(&path) {
            if !fs.is_dir(&path) {
                return Err(ConfdirError::NotADirectory(path));
            }
        } else if auto_init {
            fs.create_dir_all(&path)?;
            tracing::debug!("created directory");
        } else {
            return Err(ConfdirError::PathNotFound(path));
        }

        Ok(Self { fs, path })
    }

    /// Directory path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File system adapter the directory lives on.
    pub fn fs(&self) -> &dyn FsAdapter {
        self.fs.as_ref()
    }

    /// Shared handle to the adapter.
    pub fn fs_handle(&self) -> Arc<dyn FsAdapter> {
        Arc::clone(&self.fs)
    }

    /// Path of the entry `name` inside the directory.
    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.path.join(name)
    }

    /// Whether the directory still exists as a directory.
    pub fn exists(&self) -> bool {
        self.fs.is_dir(&self.path)
    }
}

impl fmt::Debug for DirectoryBased {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectoryBased")
            .field("fs", &"Arc<dyn FsAdapter>")
            .field("path", &self.path)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::fs_mock::MockFsAdapter;

    #[test]
    fn test_open_existing_directory() {
        let mock = MockFsAdapter::new();
        mock.add_dir("/data/app");

        let dir =
            DirectoryBased::open(Arc::new(mock.clone()), "/data/app".into(), false).unwrap();

        assert_eq!(dir.path(), Path::new("/data/app"));
        assert_eq!(dir.join("config.toml"), PathBuf::from("/data/app/config.toml"));
        assert!(dir.exists());
        assert_eq!(mock.dir_creation_count(), 0);
    }

    #[test]
    fn test_open_auto_init_creates_directory() {
        let mock = MockFsAdapter::new();

        let dir =
            DirectoryBased::open(Arc::new(mock.clone()), "/data/new/app".into(), true).unwrap();

        assert!(dir.exists());
        assert!(mock.is_dir(Path::new("/data/new")));
        assert_eq!(mock.dir_creation_count(), 1);
    }

    #[test]
    fn test_open_strict_missing_directory() {
        let mock = MockFsAdapter::new();

        let result = DirectoryBased::open(Arc::new(mock.clone()), "/missing".into(), false);

        assert!(matches!(
            result,
            Err(ConfdirError::PathNotFound(p)) if p == Path::new("/missing")
        ));
        assert_eq!(mock.dir_creation_count(), 0);
    }

    #[test]
    fn test_open_file_is_not_a_directory() {
        let mock = MockFsAdapter::with_files([("/data/app", "not a dir")]);

        for auto_init in [true, false] {
            let result =
                DirectoryBased::open(Arc::new(mock.clone()), "/data/app".into(), auto_init);
            assert!(matches!(result, Err(ConfdirError::NotADirectory(_))));
        }
        assert_eq!(mock.dir_creation_count(), 0);
    }
}
