//! Standard file system adapter implementation.
//!
//! This module provides a concrete implementation of the `FsAdapter` trait
//! using `std::fs` for real file system operations.

use crate::error::{ConfdirError, Result};
use crate::tools::fs::FsAdapter;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Standard file system adapter using `std::fs`.
///
/// This adapter provides real file system access and is the default
/// implementation in production. For testing, use
/// [`MockFsAdapter`](crate::tools::fs_mock::MockFsAdapter) instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdFsAdapter;

impl StdFsAdapter {
    /// Creates a new standard file system adapter.
    pub fn new() -> Self {
        Self
    }
}

fn write_error(path: &Path, e: std::io::Error) -> ConfdirError {
    if e.kind() == ErrorKind::PermissionDenied {
        ConfdirError::PermissionDenied(path.display().to_string())
    } else {
        ConfdirError::FileWriteError(format!("{}: {}", path.display(), e))
    }
}

impl FsAdapter for StdFsAdapter {
    fn read_to_string(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ConfdirError::PathNotFound(path.to_path_buf()),
            ErrorKind::PermissionDenied => {
                ConfdirError::PermissionDenied(path.display().to_string())
            }
            _ => ConfdirError::FileReadError(format!("{}: {}", path.display(), e)),
        })
    }

    fn write(&self, path: &Path, content: &str) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            self.create_dir_all(parent)?;
        }

        std::fs::write(path, content).map_err(|e| write_error(path, e))
    }

    fn list_dir(&self, path: &Path) -> Result<Vec<PathBuf>> {
        if !path.exists() {
            return Err(ConfdirError::PathNotFound(path.to_path_buf()));
        }

        if !path.is_dir() {
            return Err(ConfdirError::NotADirectory(path.to_path_buf()));
        }

        std::fs::read_dir(path)
            .map_err(|e| ConfdirError::FileReadError(format!("{}: {}", path.display(), e)))?
            .map(|entry| {
                entry.map(|e| e.path()).map_err(|e| {
                    ConfdirError::FileReadError(format!("failed to read directory entry: {}", e))
                })
            })
            .collect()
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|e| write_error(path, e))
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_write() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new();
        let file_path = temp_dir.path().join("config.toml");

        adapter.write(&file_path, "name = \"alpha\"\n").unwrap();

        let content = adapter.read_to_string(&file_path).unwrap();
        assert_eq!(content, "name = \"alpha\"\n");
    }

    #[test]
    fn test_write_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new();
        let file_path = temp_dir.path().join("config.toml");

        adapter.write(&file_path, "a = 1\nb = 2\n").unwrap();
        adapter.write(&file_path, "a = 3\n").unwrap();

        assert_eq!(adapter.read_to_string(&file_path).unwrap(), "a = 3\n");
    }

    #[test]
    fn test_read_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new();
        let result = adapter.read_to_string(&temp_dir.path().join("missing.toml"));

        assert!(matches!(result, Err(ConfdirError::PathNotFound(_))));
    }

    #[test]
    fn test_create_dir_all() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new();
        let nested_dir = temp_dir.path().join("a").join("b").join("c");

        adapter.create_dir_all(&nested_dir).unwrap();

        assert!(adapter.exists(&nested_dir));
        assert!(adapter.is_dir(&nested_dir));
    }

    #[test]
    fn test_list_dir_returns_full_paths() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new();

        adapter
            .write(&temp_dir.path().join("file1.txt"), "content1")
            .unwrap();
        adapter
            .create_dir_all(&temp_dir.path().join("sub"))
            .unwrap();

        let mut entries = adapter.list_dir(temp_dir.path()).unwrap();
        entries.sort();

        assert_eq!(
            entries,
            vec![temp_dir.path().join("file1.txt"), temp_dir.path().join("sub")]
        );
    }

    #[test]
    fn test_list_dir_on_file() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new();
        let file_path = temp_dir.path().join("plain.txt");
        adapter.write(&file_path, "x").unwrap();

        let result = adapter.list_dir(&file_path);
        assert!(matches!(result, Err(ConfdirError::NotADirectory(_))));

        let result = adapter.list_dir(&temp_dir.path().join("missing"));
        assert!(matches!(result, Err(ConfdirError::PathNotFound(_))));
    }

    #[test]
    fn test_exists_and_is_checks() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new();
        let file_path = temp_dir.path().join("test.txt");

        assert!(!adapter.exists(&file_path));
        assert!(!adapter.is_file(&file_path));

        adapter.write(&file_path, "content").unwrap();

        assert!(adapter.exists(&file_path));
        assert!(adapter.is_file(&file_path));
        assert!(!adapter.is_dir(&file_path));

        assert!(adapter.is_dir(temp_dir.path()));
        assert!(!adapter.is_file(temp_dir.path()));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new();
        let file_path = temp_dir.path().join("nested").join("dirs").join("file.txt");

        adapter.write(&file_path, "content").unwrap();

        assert!(adapter.is_file(&file_path));
    }

    #[test]
    fn test_write_onto_directory_fails() {
        let temp_dir = TempDir::new().unwrap();
        let adapter = StdFsAdapter::new();
        let dir_path = temp_dir.path().join("config.toml");
        adapter.create_dir_all(&dir_path).unwrap();

        assert!(adapter.write(&dir_path, "x").is_err());
        assert!(adapter.is_dir(&dir_path));
    }
}
