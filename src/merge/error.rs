//! Merge error taxonomy

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure aborts the merge immediately. Nothing is retried and, outside
/// atomic mode, nothing already written is rolled back.
#[derive(Debug, Error)]
pub enum MergeError {
    #[error("failed to remove stale destination {}: {source}", .path.display())]
    DestinationCleanup {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("module '{name}' not found at {}", .path.display())]
    ModuleNotFound { name: String, path: PathBuf },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to report progress: {0}")]
    Progress(#[source] io::Error),
}

impl MergeError {
    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Read { path: path.into(), source }
    }

    pub(crate) fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write { path: path.into(), source }
    }
}
