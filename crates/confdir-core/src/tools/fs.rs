//! File system adapter trait and operations.
//!
//! This module defines the `FsAdapter` trait, the file-system collaborator a
//! configured directory performs all of its I/O through. Implementations can
//! be real (using `std::fs`) or mocked for testing.

use crate::error::Result;
use std::path::{Path, PathBuf};

/// File system adapter trait.
///
/// Defines the operations a configured directory needs: existence and kind
/// checks, directory creation and listing, and whole-file text reads and
/// writes. Every call opens, operates and closes; no handle outlives a call.
pub trait FsAdapter: Send + Sync {
    /// Reads the contents of a file as a string.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file to read.
    ///
    /// # Errors
    ///
    /// Returns `ConfdirError::PathNotFound` if the file doesn't exist,
    /// `ConfdirError::FileReadError` if reading fails.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Writes a string to a file, creating or truncating it.
    ///
    /// Missing parent directories are created.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the file to write.
    /// * `content` - Content to write to the file.
    ///
    /// # Errors
    ///
    /// Returns `ConfdirError::FileWriteError` if writing fails or
    /// `ConfdirError::PermissionDenied` if lacking write permissions.
    fn write(&self, path: &Path, content: &str) -> Result<()>;

    /// Lists all entries in a directory.
    ///
    /// # Returns
    ///
    /// Full paths of the entries (`path` joined with each entry name), in no
    /// particular order.
    ///
    /// # Errors
    ///
    /// Returns `ConfdirError::PathNotFound` if the directory doesn't exist and
    /// `ConfdirError::NotADirectory` if the path is not a directory.
    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>>;

    /// Checks if a path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Creates a directory and all missing parent directories.
    ///
    /// # Errors
    ///
    /// Returns `ConfdirError::FileWriteError` if creation fails or
    /// `ConfdirError::PermissionDenied` if lacking write permissions.
    fn create_dir_all(&self, path: &Path) -> Result<()>;

    /// Checks if a path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Checks if a path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}
