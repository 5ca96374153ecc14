//! Directories holding a single configuration file.
//!
//! A [`ConfiguredDirectory`] owns a directory and mirrors one configuration
//! value of type `C` to `<directory>/<config file name>`. Opening it either
//! creates a missing directory and default configuration (auto-init) or
//! requires both to exist (strict). Changes are kept in memory and written
//! back lazily: [`ConfiguredDirectory::save`] only touches the file system
//! when the value was marked dirty or the caller forces it.
//!
//! A configured directory assumes it is the only writer of its configuration
//! file. Coordinating several instances or processes on the same directory is
//! left to the caller.

use crate::config::{DirectoryOptions, validate_config_file_name};
use crate::directory::DirectoryBased;
use crate::error::{ConfdirError, Result};
use crate::format::ConfigFormat;
use crate::tools::fs::FsAdapter;
use crate::tools::structured::StructuredFs;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A directory whose persistent state is one structured configuration file.
///
/// # Examples
///
/// ```
/// use confdir_core::ConfiguredDirectory;
/// use confdir_core::tools::fs_mock::MockFsAdapter;
/// use serde::{Deserialize, Serialize};
/// use std::sync::Arc;
///
/// #[derive(Debug, Default, Serialize, Deserialize)]
/// struct Settings {
///     retries: u32,
/// }
///
/// # fn main() -> confdir_core::Result<()> {
/// let fs = Arc::new(MockFsAdapter::new());
/// let mut dir = ConfiguredDirectory::<Settings>::create(fs, "/srv/app", "config.toml")?;
///
/// dir.update(|settings| settings.retries = 5);
/// dir.save(false)?;
/// assert!(!dir.is_dirty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ConfiguredDirectory<C> {
    directory: DirectoryBased,
    config_file_name: String,
    format: ConfigFormat,
    configuration: C,
    dirty: bool,
}

impl<C> ConfiguredDirectory<C>
where
    C: Default + Serialize + DeserializeOwned,
{
    /// Opens the configured directory at `path`.
    ///
    /// With `options.auto_init` a missing directory is created and a missing
    /// configuration file is written with `C::default()`. The configuration
    /// file is then always read back, so the in-memory value is exactly what
    /// is on disk and the object starts clean.
    ///
    /// # Errors
    ///
    /// - `ConfdirError::InvalidArgument` if the configuration file name is
    ///   empty or not a single path component.
    /// - `ConfdirError::PathNotFound` if the directory or configuration file is
    ///   missing and auto-init is off.
    /// - `ConfdirError::NotADirectory` if `path` exists but is not a directory.
    /// - `ConfdirError::NotAFile` if the configuration path is not a regular file.
    /// - `ConfdirError::Serialization` if the file does not parse as `C`.
    #[tracing::instrument(
        skip_all,
        fields(path = %path.as_ref().display(), file = %options.config_file_name)
    )]
    pub fn open(
        fs: Arc<dyn FsAdapter>,
        path: impl AsRef<Path>,
        options: DirectoryOptions,
    ) -> Result<Self> {
        options.validate()?;

        let directory = DirectoryBased::open(fs, path.as_ref().to_path_buf(), options.auto_init)?;

        let mut this = Self {
            directory,
            config_file_name: options.config_file_name,
            format: options.format,
            configuration: C::default(),
            dirty: false,
        };

        if options.auto_init && !this.directory.fs().exists(&this.configuration_path()) {
            tracing::info!("writing default configuration");
            this.write_configuration()?;
        }

        this.read_configuration()?;
        this.dirty = false;

        Ok(this)
    }

    /// Opens `path` with auto-init, inferring the format from `config_file_name`.
    pub fn create(
        fs: Arc<dyn FsAdapter>,
        path: impl AsRef<Path>,
        config_file_name: impl Into<String>,
    ) -> Result<Self> {
        Self::open(fs, path, DirectoryOptions::new(config_file_name))
    }

    /// Opens `path` strictly: directory and configuration file must exist.
    pub fn open_existing(
        fs: Arc<dyn FsAdapter>,
        path: impl AsRef<Path>,
        config_file_name: impl Into<String>,
    ) -> Result<Self> {
        Self::open(fs, path, DirectoryOptions::new(config_file_name).strict())
    }

    /// Writes the configuration if it is dirty or `force` is set.
    ///
    /// When neither holds this does nothing and performs no file system
    /// access. After a successful call the object is clean.
    ///
    /// # Errors
    ///
    /// Returns `ConfdirError::NotAFile` if the configuration path has become
    /// a directory, or the adapter's write error. On error the dirty flag is
    /// left as it was, so the save can be retried.
    #[tracing::instrument(skip_all, fields(path = %self.directory.path().display(), force = force))]
    pub fn save(&mut self, force: bool) -> Result<()> {
        if force || self.dirty {
            self.write_configuration()?;
        } else {
            tracing::trace!("configuration clean, skipping write");
        }
        self.dirty = false;
        Ok(())
    }

    /// Re-reads the configuration file, discarding unsaved changes.
    ///
    /// # Errors
    ///
    /// Same as reading during [`open`](Self::open). On error the in-memory
    /// value and dirty flag are unchanged.
    pub fn reload(&mut self) -> Result<()> {
        self.read_configuration()?;
        self.dirty = false;
        Ok(())
    }

    fn read_configuration(&mut self) -> Result<()> {
        let path = self.configuration_path();
        let fs = self.directory.fs();

        if !fs.exists(&path) {
            return Err(ConfdirError::PathNotFound(path));
        }
        if !fs.is_file(&path) {
            return Err(ConfdirError::NotAFile(path));
        }

        self.configuration = fs.read_structured(&path, self.format)?;
        self.dirty = false;
        tracing::debug!(path = %path.display(), "read configuration");
        Ok(())
    }

    fn write_configuration(&mut self) -> Result<()> {
        let path = self.configuration_path();
        let fs = self.directory.fs();

        if fs.exists(&path) && !fs.is_file(&path) {
            return Err(ConfdirError::NotAFile(path));
        }

        fs.write_structured(&path, &self.configuration, self.format)?;
        self.dirty = false;
        tracing::debug!(path = %path.display(), "wrote configuration");
        Ok(())
    }
}

impl<C> ConfiguredDirectory<C> {
    /// Path of the configuration file: the directory joined with the file name.
    pub fn configuration_path(&self) -> PathBuf {
        self.directory.join(&self.config_file_name)
    }

    /// Current in-memory configuration.
    pub fn configuration(&self) -> &C {
        &self.configuration
    }

    /// Mutable access to the configuration.
    ///
    /// Call [`mark_dirty`](Self::mark_dirty) after changes that should be
    /// persisted, or use [`update`](Self::update) which does both.
    pub fn configuration_mut(&mut self) -> &mut C {
        &mut self.configuration
    }

    /// Applies `f` to the configuration and marks it dirty.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut C) -> R) -> R {
        let result = f(&mut self.configuration);
        self.mark_dirty();
        result
    }

    /// Flags the configuration as changed since the last read or write.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether there are in-memory changes not yet saved.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Directory path.
    pub fn path(&self) -> &Path {
        self.directory.path()
    }

    /// Name of the configuration file inside the directory.
    pub fn config_file_name(&self) -> &str {
        &self.config_file_name
    }

    /// Format the configuration file is stored in.
    pub fn format(&self) -> ConfigFormat {
        self.format
    }

    /// The underlying directory.
    pub fn directory(&self) -> &DirectoryBased {
        &self.directory
    }

    /// Consumes the object, returning the in-memory configuration.
    ///
    /// Unsaved changes are not written.
    pub fn into_configuration(self) -> C {
        self.configuration
    }

    /// Whether `path` looks like a configured directory: an existing
    /// directory containing a regular file named `config_file_name`.
    ///
    /// Never fails; anything unexpected yields `false`.
    pub fn is_path_to_such_object(
        fs: &dyn FsAdapter,
        path: impl AsRef<Path>,
        config_file_name: &str,
    ) -> bool {
        let path = path.as_ref();
        validate_config_file_name(config_file_name).is_ok()
            && fs.is_dir(path)
            && fs.is_file(&path.join(config_file_name))
    }

    /// Lists the children of `parent` that are configured directories for
    /// `config_file_name`, sorted by path.
    ///
    /// # Errors
    ///
    /// - `ConfdirError::InvalidArgument` for an unusable file name.
    /// - `ConfdirError::PathNotFound` / `ConfdirError::NotADirectory` if
    ///   `parent` is missing or not a directory.
    pub fn discover(
        fs: &dyn FsAdapter,
        parent: impl AsRef<Path>,
        config_file_name: &str,
    ) -> Result<Vec<PathBuf>> {
        validate_config_file_name(config_file_name)?;

        let mut found: Vec<PathBuf> = fs
            .list_dir(parent.as_ref())?
            .into_iter()
            .filter(|candidate| Self::is_path_to_such_object(fs, candidate, config_file_name))
            .collect();
        found.sort();

        tracing::debug!(
            parent = %parent.as_ref().display(),
            count = found.len(),
            "discovered configured directories"
        );
        Ok(found)
    }
}
