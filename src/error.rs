//! Error types for line counting

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a counting run.
#[derive(Error, Debug)]
pub enum CountError {
    /// Path does not exist or cannot be inspected
    #[error("stat '{path}': {source}")]
    Stat { path: PathBuf, source: io::Error },

    /// Directory listing failed
    #[error("read dir '{path}': {source}")]
    ReadDir { path: PathBuf, source: io::Error },

    /// File content could not be read
    #[error("read '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },

    /// The process working directory could not be resolved
    #[error("current directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    /// Writing a report failed
    #[error("error writing output: {0}")]
    Output(#[from] io::Error),
}

impl CountError {
    pub(crate) fn stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CountError::Stat {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CountError::ReadDir {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        CountError::Read {
            path: path.into(),
            source,
        }
    }
}
