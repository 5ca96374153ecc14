//! Confdir Core - directory-backed configuration objects.
//!
//! This crate provides objects whose persistent state is a directory holding
//! a single structured configuration file, together with the file system
//! abstraction they are built on.
//!
//! # Architecture
//!
//! The core crate is organized into several modules:
//!
//! - [`error`]: Error types and result type alias
//! - [`format`]: Structured text formats (TOML, JSON)
//! - [`config`]: Options for opening a configured directory
//! - [`tools`]: File system adapter trait, real and mock implementations
//! - [`directory`]: Directory based objects (path + adapter)
//! - [`configured`]: Directories mirroring one configuration value
//!
//! # Example
//!
//! ```rust,no_run
//! use confdir_core::{ConfiguredDirectory, StdFsAdapter};
//! use serde::{Deserialize, Serialize};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Default, Serialize, Deserialize)]
//! struct Settings {
//!     retries: u32,
//! }
//!
//! # fn main() -> confdir_core::Result<()> {
//! let fs = Arc::new(StdFsAdapter::new());
//! let mut dir = ConfiguredDirectory::<Settings>::create(fs, "/var/lib/app", "config.toml")?;
//!
//! dir.update(|settings| settings.retries += 1);
//! dir.save(false)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod configured;
pub mod directory;
pub mod error;
pub mod format;
pub mod tools;

// Re-export core types for convenience
pub use config::{DEFAULT_CONFIG_FILE_NAME, DirectoryOptions};
pub use configured::ConfiguredDirectory;
pub use directory::DirectoryBased;
pub use error::{ConfdirError, Result};
pub use format::ConfigFormat;
pub use tools::{FsAdapter, MockFsAdapter, StdFsAdapter, StructuredFs};
