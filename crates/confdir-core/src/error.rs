//! Error types for configured directory operations.
//!
//! This module defines every error variant that can surface while opening,
//! reading, or saving a configured directory. All errors use `thiserror` for
//! ergonomic error handling with context.

use std::path::PathBuf;
use thiserror::Error;

/// Error types for configured directory operations.
///
/// Each variant represents a specific failure mode with relevant context,
/// so callers can match on the kind of failure (missing path, wrong entity
/// kind, unparsable content) instead of inspecting messages.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfdirError {
    // Argument errors
    /// A required argument was empty or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    // Entity errors
    /// Expected directory or file does not exist.
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    /// Path exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// Path exists but is not a regular file.
    #[error("not a file: {0}")]
    NotAFile(PathBuf),

    // Codec errors
    /// Structured content could not be encoded or decoded.
    #[error("{}", serialization_message(.path, .message))]
    Serialization {
        /// File the content was read from or destined for, if known.
        path: Option<PathBuf>,
        /// Parser or serializer message.
        message: String,
    },

    // File system errors
    /// Error reading file.
    #[error("file read error: {0}")]
    FileReadError(String),

    /// Error writing file.
    #[error("file write error: {0}")]
    FileWriteError(String),

    /// Permission denied for the specified path.
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    // IO and system errors
    /// Standard IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    // Anyhow passthrough for rich context
    /// Generic error with context from anyhow.
    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),

    // Generic fallback
    /// Unexpected error occurred.
    #[error("unexpected error: {0}")]
    Other(String),
}

impl ConfdirError {
    /// Creates a serialization error that is not tied to a file.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            path: None,
            message: message.into(),
        }
    }

    /// Attaches `path` to a serialization error that has none yet.
    ///
    /// Other variants are returned unchanged.
    pub fn at_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::Serialization {
                path: None,
                message,
            } => Self::Serialization {
                path: Some(path.into()),
                message,
            },
            other => other,
        }
    }
}

fn serialization_message(path: &Option<PathBuf>, message: &str) -> String {
    match path {
        Some(path) => format!("serialization error in {}: {}", path.display(), message),
        None => format!("serialization error: {}", message),
    }
}

/// Result type alias for configured directory operations.
///
/// All fallible operations in this crate return this type, using
/// [`ConfdirError`] for error variants.
pub type Result<T> = std::result::Result<T, ConfdirError>;
