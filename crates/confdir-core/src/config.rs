//! Options for opening a configured directory.
//!
//! This module defines [`DirectoryOptions`], which names the configuration
//! file inside the directory, selects between auto-init and strict opening,
//! and picks the structured text format.

use crate::error::{ConfdirError, Result};
use crate::format::ConfigFormat;
use std::path::{Component, Path};

/// File name used when none is given.
pub const DEFAULT_CONFIG_FILE_NAME: &str = "config.toml";

/// How a configured directory is opened.
///
/// # Examples
///
/// ```
/// use confdir_core::{ConfigFormat, DirectoryOptions};
///
/// let options = DirectoryOptions::new("settings.json").strict();
/// assert_eq!(options.format, ConfigFormat::Json);
/// assert!(!options.auto_init);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryOptions {
    /// Name of the configuration file inside the directory.
    pub config_file_name: String,

    /// Create the directory and a default configuration file when missing.
    pub auto_init: bool,

    /// Structured text format of the configuration file.
    pub format: ConfigFormat,
}

impl DirectoryOptions {
    /// Creates auto-init options for `config_file_name`, with the format
    /// inferred from its extension.
    pub fn new(config_file_name: impl Into<String>) -> Self {
        let config_file_name = config_file_name.into();
        let format = ConfigFormat::from_path(&config_file_name);
        Self {
            config_file_name,
            auto_init: true,
            format,
        }
    }

    /// Sets whether missing directories and files are created.
    pub fn with_auto_init(mut self, auto_init: bool) -> Self {
        self.auto_init = auto_init;
        self
    }

    /// Requires the directory and configuration file to exist already.
    pub fn strict(self) -> Self {
        self.with_auto_init(false)
    }

    /// Overrides the inferred format.
    pub fn with_format(mut self, format: ConfigFormat) -> Self {
        self.format = format;
        self
    }

    /// Checks that the configuration file name is usable.
    ///
    /// # Errors
    ///
    /// Returns `ConfdirError::InvalidArgument` if the name is empty or is not
    /// a single plain path component (contains a separator, or is `.`/`..`).
    pub fn validate(&self) -> Result<()> {
        validate_config_file_name(&self.config_file_name)
    }
}

impl Default for DirectoryOptions {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_FILE_NAME)
    }
}

pub(crate) fn validate_config_file_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ConfdirError::InvalidArgument(
            "configuration file name must not be empty".to_string(),
        ));
    }

    let mut components = Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(part)), None) if part == name => Ok(()),
        _ => Err(ConfdirError::InvalidArgument(format!(
            "{} (configuration file name must be a single path component)",
            name
        ))),
    }
}
