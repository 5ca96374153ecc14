//! Mock file system adapter for testing.
//!
//! This module provides an in-memory implementation of the `FsAdapter` trait.
//! Besides simulating files and directories it counts reads, writes and
//! directory creations, and can be told to fail every write, so tests can
//! observe exactly how much I/O a configured directory performs.

use crate::error::{ConfdirError, Result};
use crate::tools::fs::FsAdapter;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Default)]
struct MockState {
    files: BTreeMap<PathBuf, String>,
    dirs: BTreeSet<PathBuf>,
    reads: usize,
    writes: usize,
    dir_creations: usize,
    fail_writes: bool,
}

impl MockState {
    fn is_dir(&self, path: &Path) -> bool {
        is_root(path) || self.dirs.contains(path)
    }

    fn add_dirs(&mut self, path: &Path) -> Result<()> {
        for ancestor in path.ancestors().filter(|p| !is_root(p)) {
            if self.files.contains_key(ancestor) {
                return Err(ConfdirError::FileWriteError(format!(
                    "{}: not a directory",
                    ancestor.display()
                )));
            }
        }
        for ancestor in path.ancestors().filter(|p| !is_root(p)) {
            self.dirs.insert(ancestor.to_path_buf());
        }
        Ok(())
    }
}

fn is_root(path: &Path) -> bool {
    path.as_os_str().is_empty() || path.parent().is_none()
}

/// Mock file system adapter for testing.
///
/// Cloning shares the underlying state, so a test can hand one clone to the
/// code under test and inspect the other.
///
/// # Examples
///
/// ```
/// use confdir_core::tools::fs::FsAdapter;
/// use confdir_core::tools::fs_mock::MockFsAdapter;
/// use std::path::Path;
///
/// let fs = MockFsAdapter::new();
/// fs.write(Path::new("/test.txt"), "content").unwrap();
/// assert_eq!(fs.read_to_string(Path::new("/test.txt")).unwrap(), "content");
/// assert_eq!(fs.write_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockFsAdapter {
    state: Arc<Mutex<MockState>>,
}

impl MockFsAdapter {
    /// Creates a new, empty mock file system.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populates the mock file system with files.
    ///
    /// Parent directories of every file are created. Counters start at zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use confdir_core::tools::fs::FsAdapter;
    /// use confdir_core::tools::fs_mock::MockFsAdapter;
    /// use std::path::{Path, PathBuf};
    ///
    /// let fs = MockFsAdapter::with_files([(PathBuf::from("/app/config.toml"), "a = 1\n")]);
    /// assert!(fs.is_dir(Path::new("/app")));
    /// ```
    pub fn with_files<P, S>(files: impl IntoIterator<Item = (P, S)>) -> Self
    where
        P: Into<PathBuf>,
        S: Into<String>,
    {
        let fs = Self::new();
        for (path, content) in files {
            fs.add_file(path, content);
        }
        fs
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Inserts a file (and its parent directories) without touching counters.
    pub fn add_file(&self, path: impl Into<PathBuf>, content: impl Into<String>) {
        let path = path.into();
        let mut state = self.state();
        if let Some(parent) = path.parent() {
            for ancestor in parent.ancestors().filter(|p| !is_root(p)) {
                state.files.remove(ancestor);
                state.dirs.insert(ancestor.to_path_buf());
            }
        }
        state.dirs.remove(&path);
        state.files.insert(path, content.into());
    }

    /// Inserts a directory (and its ancestors) without touching counters.
    ///
    /// A file already present at `path` is replaced by the directory.
    pub fn add_dir(&self, path: impl Into<PathBuf>) {
        let path = path.into();
        let mut state = self.state();
        for ancestor in path.ancestors().filter(|p| !is_root(p)) {
            state.files.remove(ancestor);
            state.dirs.insert(ancestor.to_path_buf());
        }
    }

    /// Returns the content of the file at `path`, if there is one.
    pub fn file_content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.state().files.get(path.as_ref()).cloned()
    }

    /// Returns a copy of all files (path -> content).
    pub fn get_all_files(&self) -> BTreeMap<PathBuf, String> {
        self.state().files.clone()
    }

    /// Returns all directory paths, sorted.
    pub fn get_all_dirs(&self) -> Vec<PathBuf> {
        self.state().dirs.iter().cloned().collect()
    }

    /// Number of `read_to_string` calls so far.
    pub fn read_count(&self) -> usize {
        self.state().reads
    }

    /// Number of `write` calls so far, including failed ones.
    pub fn write_count(&self) -> usize {
        self.state().writes
    }

    /// Number of `create_dir_all` calls so far.
    pub fn dir_creation_count(&self) -> usize {
        self.state().dir_creations
    }

    /// Resets all call counters to zero.
    pub fn reset_counters(&self) {
        let mut state = self.state();
        state.reads = 0;
        state.writes = 0;
        state.dir_creations = 0;
    }

    /// Makes every subsequent `write` fail with `FileWriteError` (or succeed
    /// again when `fail` is false).
    pub fn set_fail_writes(&self, fail: bool) {
        self.state().fail_writes = fail;
    }

    /// Clears all files, directories and counters.
    pub fn clear(&self) {
        *self.state() = MockState::default();
    }
}

impl FsAdapter for MockFsAdapter {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        let mut state = self.state();
        state.reads += 1;

        if state.is_dir(path) {
            return Err(ConfdirError::FileReadError(format!(
                "{}: is a directory",
                path.display()
            )));
        }

        state
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| ConfdirError::PathNotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        let mut state = self.state();
        state.writes += 1;

        if state.fail_writes {
            return Err(ConfdirError::FileWriteError(format!(
                "{}: simulated write failure",
                path.display()
            )));
        }

        if state.is_dir(path) {
            return Err(ConfdirError::FileWriteError(format!(
                "{}: is a directory",
                path.display()
            )));
        }

        // Auto-create parent directories
        if let Some(parent) = path.parent() {
            state.add_dirs(parent)?;
        }

        state.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let state = self.state();

        if state.files.contains_key(path) {
            return Err(ConfdirError::NotADirectory(path.to_path_buf()));
        }

        if !state.is_dir(path) {
            return Err(ConfdirError::PathNotFound(path.to_path_buf()));
        }

        let entries = state
            .files
            .keys()
            .chain(state.dirs.iter())
            .filter(|entry| entry.parent() == Some(path))
            .cloned()
            .collect();

        Ok(entries)
    }

    fn exists(&self, path: &Path) -> bool {
        let state = self.state();
        state.files.contains_key(path) || state.is_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        let mut state = self.state();
        state.dir_creations += 1;
        state.add_dirs(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.state().is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.state().files.contains_key(path)
    }
}
