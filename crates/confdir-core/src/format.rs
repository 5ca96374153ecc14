//! Structured text formats for configuration files.
//!
//! This module defines the codecs a configured directory can persist its
//! configuration with. Both are self-describing serde formats, so any
//! configuration type deriving `Serialize` and `Deserialize` round-trips
//! through either of them.

use crate::error::{ConfdirError, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Structured text format used to encode a configuration file.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML document (`.toml`).
    #[default]
    Toml,

    /// Pretty-printed JSON document (`.json`).
    Json,
}

impl ConfigFormat {
    /// Returns the string representation of the format.
    ///
    /// This is used for command line arguments and display purposes.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    /// Infers the format from a file name's extension.
    ///
    /// `.json` selects JSON; anything else, including no extension, selects TOML.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => ConfigFormat::Json,
            _ => ConfigFormat::Toml,
        }
    }

    /// Serializes `value` into text.
    ///
    /// # Errors
    ///
    /// Returns `ConfdirError::Serialization` if the value cannot be represented
    /// in this format (e.g. a TOML document whose root is not a table).
    pub fn encode<C: Serialize>(&self, value: &C) -> Result<String> {
        match self {
            ConfigFormat::Toml => toml::to_string_pretty(value)
                .map_err(|e| ConfdirError::serialization(e.to_string())),
            ConfigFormat::Json => serde_json::to_string_pretty(value)
                .map(|mut text| {
                    text.push('\n');
                    text
                })
                .map_err(|e| ConfdirError::serialization(e.to_string())),
        }
    }

    /// Parses `text` into a value of type `C`.
    ///
    /// # Errors
    ///
    /// Returns `ConfdirError::Serialization` if the text is malformed or does
    /// not match the schema of `C`.
    pub fn decode<C: DeserializeOwned>(&self, text: &str) -> Result<C> {
        match self {
            ConfigFormat::Toml => {
                toml::from_str(text).map_err(|e| ConfdirError::serialization(e.message()))
            }
            ConfigFormat::Json => serde_json::from_str(text)
                .map_err(|e| ConfdirError::serialization(e.to_string())),
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            _ => Err(format!("invalid config format: {}", s)),
        }
    }
}
