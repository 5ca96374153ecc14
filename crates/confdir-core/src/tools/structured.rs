//! Structured reads and writes on top of any file system adapter.
//!
//! `FsAdapter` stays object safe by only dealing in text; the generic
//! `read_structured` / `write_structured` operations live on this extension
//! trait, which is implemented for every adapter including `dyn FsAdapter`.

use crate::error::Result;
use crate::format::ConfigFormat;
use crate::tools::fs::FsAdapter;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Typed read/write of structured text files.
pub trait StructuredFs {
    /// Reads `path` and decodes it as `C` using `format`.
    ///
    /// # Errors
    ///
    /// Propagates adapter read errors; decoding failures are returned as
    /// `ConfdirError::Serialization` carrying `path`.
    fn read_structured<C: DeserializeOwned>(&self, path: &Path, format: ConfigFormat)
    -> Result<C>;

    /// Encodes `value` with `format` and writes it to `path`, creating or
    /// overwriting the file.
    ///
    /// # Errors
    ///
    /// Encoding failures are returned as `ConfdirError::Serialization`
    /// carrying `path`; nothing is written in that case.
    fn write_structured<C: Serialize>(
        &self,
        path: &Path,
        value: &C,
        format: ConfigFormat,
    ) -> Result<()>;
}

impl<F: FsAdapter + ?Sized> StructuredFs for F {
    fn read_structured<C: DeserializeOwned>(
        &self,
        path: &Path,
        format: ConfigFormat,
    ) -> Result<C> {
        let text = self.read_to_string(path)?;
        format.decode(&text).map_err(|e| e.at_path(path))
    }

    fn write_structured<C: Serialize>(
        &self,
        path: &Path,
        value: &C,
        format: ConfigFormat,
    ) -> Result<()> {
        let text = format.encode(value).map_err(|e| e.at_path(path))?;
        self.write(path, &text)
    }
}
