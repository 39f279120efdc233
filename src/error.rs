//! Error types for mtdu
//!
//! `EntryError` describes why a single filesystem entry contributed nothing to
//! a total. Those errors are logged and counted but never returned from a scan.
//! `ScanError` covers the few failures that stop a scan before it begins.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Why one entry was skipped during traversal
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("'{}' does not exist", .path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading '{}'", .path.display())]
    PermissionDenied { path: PathBuf },

    /// The entry was listed by its parent but was gone by the time it was queried
    #[error("'{}' vanished while its directory was being read", .path.display())]
    Vanished { path: PathBuf },

    #[error("could not determine the type of '{}': {source}", .path.display())]
    Undetermined {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Where in the traversal an I/O error was raised
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Stage {
    /// Querying the path a task was created for
    Path,
    /// Querying an entry discovered by enumerating its parent
    Child,
    /// Reading the file type of a child entry
    FileType,
    /// Opening or iterating a directory
    ReadDir,
}

impl EntryError {
    /// Map an `io::Error` onto the traversal error taxonomy.
    pub fn classify(path: impl Into<PathBuf>, stage: Stage, source: io::Error) -> Self {
        let path = path.into();
        match (source.kind(), stage) {
            (io::ErrorKind::NotFound, Stage::Child | Stage::FileType) => Self::Vanished { path },
            (io::ErrorKind::NotFound, _) => Self::NotFound { path },
            (io::ErrorKind::PermissionDenied, _) => Self::PermissionDenied { path },
            (_, Stage::FileType) => Self::Undetermined { path, source },
            _ => Self::Io { path, source },
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::Vanished { path }
            | Self::Undetermined { path, .. }
            | Self::Io { path, .. } => path,
        }
    }
}

/// Failures that prevent a scan from starting
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("failed to spawn worker thread {id}: {source}")]
    SpawnWorker {
        id: usize,
        #[source]
        source: io::Error,
    },

    #[error("worker pool needs at least one thread")]
    NoWorkers,
}
