//! Error types for loading source files from disk.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a source or include file.
#[derive(Debug, Error)]
pub enum LoadError {
    /// IO error during read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path exists but is a directory or other non-regular file.
    #[error("not a file: {}", .0.display())]
    NotAFile(PathBuf),
}

impl LoadError {
    /// Create an IO error for `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path the failed load was attempted on.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. } | Self::NotAFile(path) => path,
        }
    }
}
