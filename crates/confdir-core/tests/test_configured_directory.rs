//! Integration tests for configured directories on the real file system.
//!
//! Tests auto-init, strict opening, persistence and round-trips through
//! `StdFsAdapter` in temporary directories.

use confdir_core::{
    ConfdirError, ConfigFormat, ConfiguredDirectory, DirectoryOptions, FsAdapter, StdFsAdapter,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct WorkspaceConfig {
    title: String,
    max_jobs: u32,
    verbose: bool,
    #[serde(default)]
    env: BTreeMap<String, String>,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            title: "untitled".to_string(),
            max_jobs: 4,
            verbose: false,
            env: BTreeMap::new(),
        }
    }
}

type WorkspaceDir = ConfiguredDirectory<WorkspaceConfig>;

fn std_fs() -> Arc<dyn FsAdapter> {
    Arc::new(StdFsAdapter::new())
}

#[test]
fn test_default_init_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("projects").join("alpha");

    let created = WorkspaceDir::create(std_fs(), &root, "workspace.toml").unwrap();
    assert_eq!(created.configuration(), &WorkspaceConfig::default());
    assert!(root.is_dir());
    assert!(root.join("workspace.toml").is_file());

    let reopened = WorkspaceDir::create(std_fs(), &root, "workspace.toml").unwrap();
    assert_eq!(reopened.configuration(), &WorkspaceConfig::default());

    let strict = WorkspaceDir::open_existing(std_fs(), &root, "workspace.toml").unwrap();
    assert_eq!(strict.configuration(), &WorkspaceConfig::default());
}

#[test]
fn test_changes_persist_across_instances() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("alpha");

    let mut dir = WorkspaceDir::create(std_fs(), &root, "workspace.toml").unwrap();
    dir.update(|c| {
        c.title = "Alpha".to_string();
        c.max_jobs = 16;
        c.env.insert("RUST_LOG".to_string(), "debug".to_string());
    });
    dir.save(false).unwrap();

    let reopened = WorkspaceDir::open_existing(std_fs(), &root, "workspace.toml").unwrap();
    assert_eq!(reopened.configuration(), dir.configuration());
}

#[test]
fn test_unsaved_changes_are_not_persisted() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("alpha");

    let mut dir = WorkspaceDir::create(std_fs(), &root, "workspace.toml").unwrap();
    dir.update(|c| c.verbose = true);
    drop(dir);

    let reopened = WorkspaceDir::open_existing(std_fs(), &root, "workspace.toml").unwrap();
    assert!(!reopened.configuration().verbose);
}

#[test]
fn test_round_trip_in_both_formats() {
    let temp_dir = TempDir::new().unwrap();
    let value = WorkspaceConfig {
        title: "quoted \"title\" with unicode é".to_string(),
        max_jobs: 0,
        verbose: true,
        env: BTreeMap::from([
            ("A".to_string(), "1".to_string()),
            ("B".to_string(), String::new()),
        ]),
    };

    for format in [ConfigFormat::Toml, ConfigFormat::Json] {
        let root = temp_dir.path().join(format.as_str());
        let options = DirectoryOptions::new("state").with_format(format);

        let mut dir = WorkspaceDir::open(std_fs(), &root, options.clone()).unwrap();
        *dir.configuration_mut() = value.clone();
        dir.mark_dirty();
        dir.save(false).unwrap();

        let reopened = WorkspaceDir::open(std_fs(), &root, options.strict()).unwrap();
        assert_eq!(reopened.configuration(), &value, "format {}", format);
    }
}

#[test]
fn test_strict_open_on_empty_directory_writes_nothing() {
    let temp_dir = TempDir::new().unwrap();

    let result = WorkspaceDir::open_existing(std_fs(), temp_dir.path(), "workspace.toml");

    assert!(matches!(result, Err(ConfdirError::PathNotFound(_))));
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
}

#[test]
fn test_file_at_directory_path() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("alpha");
    fs::write(&root, "not a directory").unwrap();

    let result = WorkspaceDir::create(std_fs(), &root, "workspace.toml");

    assert!(matches!(result, Err(ConfdirError::NotADirectory(_))));
    assert_eq!(fs::read_to_string(&root).unwrap(), "not a directory");
}

#[test]
fn test_directory_at_config_path() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("alpha");
    fs::create_dir_all(root.join("workspace.toml")).unwrap();

    let result = WorkspaceDir::create(std_fs(), &root, "workspace.toml");

    assert!(matches!(result, Err(ConfdirError::NotAFile(_))));
    assert!(root.join("workspace.toml").is_dir());
}

#[test]
fn test_config_replaced_by_directory_fails_save() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("alpha");
    let mut dir = WorkspaceDir::create(std_fs(), &root, "workspace.toml").unwrap();

    fs::remove_file(root.join("workspace.toml")).unwrap();
    fs::create_dir(root.join("workspace.toml")).unwrap();

    let result = dir.save(true);
    assert!(matches!(result, Err(ConfdirError::NotAFile(_))));
    assert!(root.join("workspace.toml").is_dir());
}

#[test]
fn test_malformed_file_fails_to_open() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("alpha");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("workspace.toml"), "title = [unterminated").unwrap();

    let result = WorkspaceDir::create(std_fs(), &root, "workspace.toml");

    assert!(matches!(result, Err(ConfdirError::Serialization { .. })));
    assert_eq!(
        fs::read_to_string(root.join("workspace.toml")).unwrap(),
        "title = [unterminated"
    );
}

#[test]
fn test_sibling_files_are_untouched() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join("alpha");
    fs::create_dir_all(&root).unwrap();
    fs::write(root.join("notes.md"), "# notes").unwrap();

    let mut dir = WorkspaceDir::create(std_fs(), &root, "workspace.toml").unwrap();
    dir.save(true).unwrap();

    assert_eq!(fs::read_to_string(root.join("notes.md")).unwrap(), "# notes");
}
